//! Score computation under the template's strategy, merging the
//! professional's manual judgments for subjective answers.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use escala_core::models::{
    Answer, AnswerPayload, BandingTable, Question, QuestionType, ScoringStrategy, Template,
};

use crate::error::EngineError;
use crate::responses::ResponseStore;
use crate::rules;

/// Professional per-question numeric judgments supplied at evaluation
/// time. Meaning depends on the strategy and the question type: a
/// binary accept/reject under EqualWeight, a clamped score or a range
/// increment under Baremo.
pub type Overrides = HashMap<Uuid, f64>;

/// The outcome of scoring one administration.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreReport {
    /// Absent under the None strategy.
    pub total: Option<f64>,
    /// Subtotals per group, when the template defines groups.
    pub per_group: BTreeMap<Uuid, f64>,
    /// Interpretation labels per group, looked up in the injected
    /// banding table.
    pub interpretations: BTreeMap<Uuid, String>,
    pub total_interpretation: Option<String>,
}

/// Compute the score for a completed administration. Pure: no state is
/// touched here — locking the instance is the facade's job.
pub fn score(
    template: &Template,
    responses: &ResponseStore,
    overrides: &Overrides,
    banding: &BandingTable,
) -> Result<ScoreReport, EngineError> {
    if template.strategy == ScoringStrategy::None {
        // Raw answers are read clinically; nothing numeric to produce.
        return Ok(ScoreReport {
            total: None,
            per_group: BTreeMap::new(),
            interpretations: BTreeMap::new(),
            total_interpretation: None,
        });
    }

    let mut total = 0.0;
    let mut per_group: BTreeMap<Uuid, f64> = BTreeMap::new();

    for question in &template.questions {
        let answers = responses.answers_for(question.id);
        let contribution = match template.strategy {
            ScoringStrategy::None => unreachable!("handled above"),
            ScoringStrategy::EqualWeight => equal_weight(question, answers, overrides)?,
            ScoringStrategy::Baremo => baremo(question, answers, overrides),
        };
        total += contribution;
        if let Some(group_id) = question.group_id {
            *per_group.entry(group_id).or_insert(0.0) += contribution;
        }
    }

    let interpretations = per_group
        .iter()
        .filter_map(|(group_id, subtotal)| {
            banding
                .group_label(*group_id, *subtotal)
                .map(|label| (*group_id, label.to_string()))
        })
        .collect();

    Ok(ScoreReport {
        total_interpretation: banding.total_label(total).map(str::to_string),
        total: Some(total),
        per_group,
        interpretations,
    })
}

/// Every answered question contributes its fixed weight. Subjective
/// questions need an explicit binary judgment: exactly 0 or the
/// question's weight, anything else is refused.
fn equal_weight(
    question: &Question,
    answers: &[Answer],
    overrides: &Overrides,
) -> Result<f64, EngineError> {
    if !rules::is_answered(question, answers) {
        return Ok(0.0);
    }
    if !question.kind.is_subjective() {
        return Ok(question.weight);
    }
    match overrides.get(&question.id) {
        Some(&value) if value == 0.0 || value == question.weight => Ok(value),
        Some(&value) => Err(EngineError::InvalidOverride {
            question_id: question.id,
            value,
            weight: question.weight,
        }),
        // Not judged yet: contributes nothing.
        None => Ok(0.0),
    }
}

/// Lookup-table weighting: contributions come from option values.
/// Multi-choice takes the maximum selected value, not the sum. The
/// professional's judgment for a subjective answer is clamped to
/// [0, weight] here rather than rejected — unlike EqualWeight's binary
/// rule and unlike range submission, which reject outright.
fn baremo(question: &Question, answers: &[Answer], overrides: &Overrides) -> f64 {
    if !rules::is_answered(question, answers) {
        return 0.0;
    }
    match question.kind {
        QuestionType::SingleChoice | QuestionType::Select => answers
            .first()
            .and_then(Answer::option_id)
            .and_then(|id| question.option_by_id(id))
            .map(|o| o.value)
            .unwrap_or(0.0),
        QuestionType::MultiChoice => answers
            .iter()
            .filter_map(Answer::option_id)
            .filter_map(|id| question.option_by_id(id))
            .map(|o| o.value)
            .fold(0.0, f64::max),
        QuestionType::Range => {
            let value = answers
                .iter()
                .find_map(|a| match a.payload {
                    AnswerPayload::Value { value } => Some(value),
                    _ => None,
                })
                .unwrap_or(0.0);
            value + overrides.get(&question.id).copied().unwrap_or(0.0)
        }
        QuestionType::ShortText => overrides
            .get(&question.id)
            .map(|v| v.clamp(0.0, question.weight))
            .unwrap_or(0.0),
    }
}
