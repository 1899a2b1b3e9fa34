use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// How answers are converted into a numeric score. Chosen once per
/// template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ScoringStrategy {
    /// No numeric score; raw answers are read clinically.
    None,
    /// Each answered question contributes its fixed weight.
    EqualWeight,
    /// Lookup-table weighting: contributions come from option values.
    Baremo,
}
