//! Lifecycle state of one administration. State is re-derived from the
//! current answers on every check; answers stay mutable until the
//! professional evaluates, so an edit that drops progress below 100%
//! demotes the instance back to in-progress. Evaluated is the only
//! sticky state.

use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::progress::Progress;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum InstanceState {
    NotStarted,
    InProgress,
    Completed,
    Evaluated,
}

impl InstanceState {
    /// Derive the state from current data. `evaluated` is the stored
    /// terminal flag; everything else comes from the live progress.
    pub fn derive(progress: Progress, has_answers: bool, evaluated: bool) -> Self {
        if evaluated {
            InstanceState::Evaluated
        } else if progress.complete {
            InstanceState::Completed
        } else if has_answers {
            InstanceState::InProgress
        } else {
            InstanceState::NotStarted
        }
    }

    /// Terminal, read-only state.
    pub fn is_locked(&self) -> bool {
        matches!(self, InstanceState::Evaluated)
    }
}

impl fmt::Display for InstanceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            InstanceState::NotStarted => "not_started",
            InstanceState::InProgress => "in_progress",
            InstanceState::Completed => "completed",
            InstanceState::Evaluated => "evaluated",
        };
        f.write_str(label)
    }
}

/// A state change observed after a submission or evaluation. Reported
/// to the caller so its alerting collaborators can react; the engine
/// sends no notifications itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Transition {
    pub from: InstanceState,
    pub to: InstanceState,
    pub at: jiff::Timestamp,
}
