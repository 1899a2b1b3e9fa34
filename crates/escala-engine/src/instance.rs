//! One respondent's administration of a template: the single mutation
//! surface tying responses, progress, lifecycle, and scoring together.

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use escala_core::models::{AnswerPayload, BandingTable, Template};

use crate::error::EngineError;
use crate::lifecycle::{InstanceState, Transition};
use crate::progress::Progress;
use crate::responses::ResponseStore;
use crate::scoring::{self, Overrides, ScoreReport};

/// The stored result of the professional's evaluation. Present iff the
/// instance is in the evaluated state.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Evaluation {
    pub report: ScoreReport,
    pub comment: String,
    pub overrides: Overrides,
    pub evaluated_at: jiff::Timestamp,
}

/// What the caller gets back after an accepted submission: the shapes
/// its persistence and alerting collaborators consume.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Submission {
    pub progress: Progress,
    pub state: InstanceState,
    /// Present when this submission changed the lifecycle state.
    pub transition: Option<Transition>,
}

/// One administration of a template by one respondent.
///
/// The template is cloned at creation, so later template editions never
/// affect this instance. Owned by the respondent until completed, then
/// by the reviewing professional until evaluated; evaluated is terminal
/// and read-only.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TestInstance {
    pub id: Uuid,
    template: Template,
    responses: ResponseStore,
    evaluation: Option<Evaluation>,
    pub created_at: jiff::Timestamp,
    pub updated_at: jiff::Timestamp,
}

impl TestInstance {
    pub fn new(template: &Template) -> Self {
        let now = jiff::Timestamp::now();
        Self {
            id: Uuid::new_v4(),
            template: template.clone(),
            responses: ResponseStore::new(),
            evaluation: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn template(&self) -> &Template {
        &self.template
    }

    pub fn responses(&self) -> &ResponseStore {
        &self.responses
    }

    /// Recomputed from current answers on every call; never cached.
    pub fn progress(&self) -> Progress {
        Progress::compute(&self.template, &self.responses)
    }

    /// Re-derived from current answers on every call. Editing an answer
    /// after reaching completed (but before evaluation) can demote the
    /// instance back to in-progress.
    pub fn state(&self) -> InstanceState {
        InstanceState::derive(
            self.progress(),
            !self.responses.is_empty(),
            self.evaluation.is_some(),
        )
    }

    /// Record one answer. Either the store mutates and the derived
    /// figures are returned, or nothing changes at all.
    pub fn submit_answer(
        &mut self,
        question_id: Uuid,
        payload: AnswerPayload,
    ) -> Result<Submission, EngineError> {
        let before = self.state();
        if before.is_locked() {
            return Err(EngineError::InstanceLocked);
        }
        self.responses.submit(&self.template, question_id, payload)?;
        self.updated_at = jiff::Timestamp::now();

        let progress = self.progress();
        let state = self.state();
        let transition = (state != before).then(|| Transition {
            from: before,
            to: state,
            at: self.updated_at,
        });
        Ok(Submission {
            progress,
            state,
            transition,
        })
    }

    /// The professional's final act: score the completed administration
    /// and lock the instance. Fails with `NotReady` before completion
    /// and `InstanceLocked` once evaluated; the stored result remains
    /// available through [`TestInstance::evaluation`] for idempotent
    /// reads.
    pub fn evaluate(
        &mut self,
        overrides: Overrides,
        comment: impl Into<String>,
        banding: &BandingTable,
    ) -> Result<&Evaluation, EngineError> {
        let state = self.state();
        match state {
            InstanceState::Evaluated => return Err(EngineError::InstanceLocked),
            InstanceState::Completed => {}
            _ => return Err(EngineError::NotReady { state }),
        }
        let report = scoring::score(&self.template, &self.responses, &overrides, banding)?;
        self.updated_at = jiff::Timestamp::now();
        Ok(self.evaluation.insert(Evaluation {
            report,
            comment: comment.into(),
            overrides,
            evaluated_at: self.updated_at,
        }))
    }

    /// The stored evaluation, if the professional has finished.
    pub fn evaluation(&self) -> Option<&Evaluation> {
        self.evaluation.as_ref()
    }

    /// The final numeric score, if evaluated under a numeric strategy.
    pub fn final_score(&self) -> Option<f64> {
        self.evaluation.as_ref().and_then(|e| e.report.total)
    }
}
