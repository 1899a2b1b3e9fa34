use thiserror::Error;
use uuid::Uuid;

use escala_core::error::AnswerError;

use crate::lifecycle::InstanceState;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    #[error(transparent)]
    Answer(#[from] AnswerError),

    /// Evaluation requested before the respondent finished.
    #[error("instance is not ready for evaluation (state: {state})")]
    NotReady { state: InstanceState },

    /// The instance was evaluated and is read-only.
    #[error("instance is evaluated and locked")]
    InstanceLocked,

    /// An EqualWeight subjective judgment must be exactly 0 or the
    /// question's weight.
    #[error("override {value} for question {question_id} must be 0 or {weight}")]
    InvalidOverride {
        question_id: Uuid,
        value: f64,
        weight: f64,
    },
}
