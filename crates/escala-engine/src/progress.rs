//! Completion progress derived from a template and its responses.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use escala_core::models::Template;

use crate::responses::ResponseStore;
use crate::rules;

/// Completion figure recomputed after every submission. Pure: identical
/// (template, responses) pairs always produce identical output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Progress {
    pub percent: u8,
    pub complete: bool,
}

impl Progress {
    pub fn compute(template: &Template, responses: &ResponseStore) -> Self {
        let total = template.questions.len();
        if total == 0 {
            // Nothing to answer is trivially complete.
            return Self {
                percent: 100,
                complete: true,
            };
        }
        let satisfied = template
            .questions
            .iter()
            .filter(|q| !q.required || rules::is_answered(q, responses.answers_for(q.id)))
            .count();
        let complete = satisfied == total;
        let percent = if complete {
            100
        } else {
            // Rounding must never report 100 for an unfinished form.
            let rounded = (100.0 * satisfied as f64 / total as f64).round() as u8;
            rounded.min(99)
        };
        Self { percent, complete }
    }
}
