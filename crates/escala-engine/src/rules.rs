//! Per-type answer rules: whether a payload fits a question, and
//! whether a question's recorded answers make it count as answered.
//! One closed match per contract, so adding a question type fails to
//! compile until every rule handles it.

use escala_core::error::AnswerError;
use escala_core::models::{Answer, AnswerPayload, Question, QuestionType};

/// Check a payload against the question's type before it is allowed to
/// touch the response store. Values outside a range are rejected here,
/// never clamped.
pub fn validate(question: &Question, payload: &AnswerPayload) -> Result<(), AnswerError> {
    match (question.kind, payload) {
        (
            QuestionType::SingleChoice | QuestionType::MultiChoice | QuestionType::Select,
            AnswerPayload::Choice { option_id },
        ) => {
            if question.option_by_id(*option_id).is_none() {
                return Err(AnswerError::UnknownOption {
                    question_id: question.id,
                    option_id: *option_id,
                });
            }
            Ok(())
        }
        (QuestionType::ShortText, AnswerPayload::Text { text }) => {
            if text.trim().is_empty() {
                return Err(AnswerError::TypeMismatch {
                    question_id: question.id,
                });
            }
            Ok(())
        }
        (QuestionType::Range, AnswerPayload::Value { value }) => {
            let Some(bounds) = question.bounds else {
                // Template validation guarantees bounds on Range questions.
                return Err(AnswerError::TypeMismatch {
                    question_id: question.id,
                });
            };
            if !bounds.contains(*value) {
                return Err(AnswerError::OutOfRange {
                    question_id: question.id,
                    value: *value,
                    min: bounds.min,
                    max: bounds.max,
                });
            }
            Ok(())
        }
        _ => Err(AnswerError::TypeMismatch {
            question_id: question.id,
        }),
    }
}

/// Whether the recorded answers satisfy this question for progress
/// purposes.
pub fn is_answered(question: &Question, answers: &[Answer]) -> bool {
    match question.kind {
        QuestionType::SingleChoice | QuestionType::Select => {
            answers.len() == 1 && known_option(question, &answers[0])
        }
        QuestionType::MultiChoice => {
            !answers.is_empty() && answers.iter().all(|a| known_option(question, a))
        }
        QuestionType::ShortText => answers.iter().any(|a| match &a.payload {
            AnswerPayload::Text { text } => !text.trim().is_empty(),
            _ => false,
        }),
        QuestionType::Range => answers.iter().any(|a| match &a.payload {
            AnswerPayload::Value { value } => {
                question.bounds.is_some_and(|b| b.contains(*value))
            }
            _ => false,
        }),
    }
}

fn known_option(question: &Question, answer: &Answer) -> bool {
    answer
        .option_id()
        .and_then(|id| question.option_by_id(id))
        .is_some()
}
