//! The per-instance answer collection. Validates before it mutates, so
//! a rejected submission leaves the store exactly as it was.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use escala_core::error::AnswerError;
use escala_core::models::{Answer, AnswerPayload, QuestionType, Template};

use crate::rules;

/// Answers keyed by question, enforcing per-type cardinality. The
/// version counter bumps on every accepted mutation so callers can
/// invalidate any progress or state they cached; the engine itself
/// recomputes on demand and caches nothing.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ResponseStore {
    answers: BTreeMap<Uuid, Vec<Answer>>,
    version: u64,
}

impl ResponseStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an answer for `question_id`.
    ///
    /// Single-answer kinds (single choice, select, text, range) replace
    /// the previous answer and refresh its timestamp. Multi-choice uses
    /// toggle semantics: submitting an already-selected option removes
    /// it, an unselected one adds it.
    pub fn submit(
        &mut self,
        template: &Template,
        question_id: Uuid,
        payload: AnswerPayload,
    ) -> Result<(), AnswerError> {
        let question = template
            .question_by_id(question_id)
            .ok_or(AnswerError::UnknownQuestion { question_id })?;
        rules::validate(question, &payload)?;

        // validate() only passes Choice payloads through for choice kinds.
        let toggled = match (question.kind, &payload) {
            (QuestionType::MultiChoice, AnswerPayload::Choice { option_id }) => Some(*option_id),
            _ => None,
        };

        let answers = self.answers.entry(question_id).or_default();
        match toggled {
            Some(option_id) => {
                if let Some(pos) = answers.iter().position(|a| a.option_id() == Some(option_id)) {
                    answers.remove(pos);
                } else {
                    answers.push(Answer::new(question_id, payload));
                }
            }
            None => {
                answers.clear();
                answers.push(Answer::new(question_id, payload));
            }
        }
        if answers.is_empty() {
            self.answers.remove(&question_id);
        }
        self.version += 1;
        Ok(())
    }

    /// The recorded answers for one question; empty if unanswered.
    pub fn answers_for(&self, question_id: Uuid) -> &[Answer] {
        self.answers
            .get(&question_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// All recorded answers, for raw clinical reading under the None
    /// strategy.
    pub fn all_answers(&self) -> impl Iterator<Item = &Answer> {
        self.answers.values().flatten()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    pub fn version(&self) -> u64 {
        self.version
    }
}
