use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// One interpretation band: scores in `[min, max]` (inclusive) read as
/// `label` (e.g. "low", "average", "high").
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Band {
    pub min: f64,
    pub max: f64,
    pub label: String,
}

impl Band {
    pub fn contains(&self, score: f64) -> bool {
        score >= self.min && score <= self.max
    }
}

/// Interpretation thresholds supplied by the host application. The
/// scoring engine only looks labels up here; it never computes them.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BandingTable {
    /// Bands keyed by group id, for subscale interpretation.
    pub group_bands: HashMap<Uuid, Vec<Band>>,
    /// Bands for the template-wide total.
    pub total_bands: Vec<Band>,
}

impl BandingTable {
    /// Label for a group subtotal. First matching band wins.
    pub fn group_label(&self, group_id: Uuid, score: f64) -> Option<&str> {
        self.group_bands
            .get(&group_id)
            .and_then(|bands| Self::lookup(bands, score))
    }

    /// Label for the template-wide total.
    pub fn total_label(&self, score: f64) -> Option<&str> {
        Self::lookup(&self.total_bands, score)
    }

    fn lookup(bands: &[Band], score: f64) -> Option<&str> {
        bands
            .iter()
            .find(|b| b.contains(score))
            .map(|b| b.label.as_str())
    }
}
