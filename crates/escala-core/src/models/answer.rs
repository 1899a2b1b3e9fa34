use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// The shape of one answer submission. A payload must fit the target
/// question's kind or the engine rejects it before any mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "type", rename_all = "snake_case")]
#[ts(export)]
pub enum AnswerPayload {
    /// Selects (or, for MultiChoice, toggles) an option.
    Choice { option_id: Uuid },
    /// Free text for ShortText questions.
    Text { text: String },
    /// Numeric value for Range questions.
    Value { value: f64 },
}

/// A recorded answer for one question.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Answer {
    pub question_id: Uuid,
    pub payload: AnswerPayload,
    pub recorded_at: jiff::Timestamp,
}

impl Answer {
    pub fn new(question_id: Uuid, payload: AnswerPayload) -> Self {
        Self {
            question_id,
            payload,
            recorded_at: jiff::Timestamp::now(),
        }
    }

    /// The selected option id, if this answer carries one.
    pub fn option_id(&self) -> Option<Uuid> {
        match &self.payload {
            AnswerPayload::Choice { option_id } => Some(*option_id),
            _ => None,
        }
    }
}
