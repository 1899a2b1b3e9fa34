use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// A named partition of a template's questions, used for subscale
/// subtotals and interpretation (e.g. "Organization", "Motivation").
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Group {
    pub id: Uuid,
    pub name: String,
}
