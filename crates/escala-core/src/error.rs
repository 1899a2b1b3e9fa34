use thiserror::Error;
use uuid::Uuid;

/// Construction-time template validation failures. A template that
/// raises one of these can never be instantiated into a test.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TemplateError {
    #[error("two questions share display order {order}")]
    DuplicateOrder { order: u32 },

    #[error("choice question {question_id} has no options")]
    MissingOptions { question_id: Uuid },

    #[error("non-choice question {question_id} carries options")]
    UnexpectedOptions { question_id: Uuid },

    #[error("question {question_id} has invalid range bounds")]
    BadRangeBounds { question_id: Uuid },

    #[error("question {question_id} has a negative weight")]
    NegativeWeight { question_id: Uuid },

    #[error("question {question_id} references an unknown group")]
    UnknownGroup { question_id: Uuid },
}

/// Submission-time answer rejections. Raised before any mutation, so a
/// failed submit leaves the response store untouched.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnswerError {
    #[error("question {question_id} is not part of this template")]
    UnknownQuestion { question_id: Uuid },

    #[error("payload does not fit the type of question {question_id}")]
    TypeMismatch { question_id: Uuid },

    #[error("value {value} for question {question_id} is outside [{min}, {max}]")]
    OutOfRange {
        question_id: Uuid,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("option {option_id} does not belong to question {question_id}")]
    UnknownOption { question_id: Uuid, option_id: Uuid },
}
