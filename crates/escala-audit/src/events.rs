use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use escala_engine::lifecycle::Transition;

/// A lifecycle state change on one administration.
#[derive(Debug, Clone, Serialize)]
pub struct TransitionEvent {
    pub instance_id: Uuid,
    pub transition: Transition,
    pub details: Option<serde_json::Value>,
}

impl TransitionEvent {
    pub fn new(instance_id: Uuid, transition: Transition) -> Self {
        Self {
            instance_id,
            transition,
            details: None,
        }
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Emit this event via tracing.
    pub fn emit(&self) {
        info!(
            audit.instance_id = %self.instance_id,
            audit.from = %self.transition.from,
            audit.to = %self.transition.to,
            "instance transition"
        );
    }
}

/// A completed professional evaluation.
#[derive(Debug, Clone, Serialize)]
pub struct EvaluationEvent {
    pub instance_id: Uuid,
    pub total: Option<f64>,
    pub interpretation: Option<String>,
}

impl EvaluationEvent {
    pub fn new(instance_id: Uuid, total: Option<f64>, interpretation: Option<String>) -> Self {
        Self {
            instance_id,
            total,
            interpretation,
        }
    }

    /// Emit this event via tracing.
    pub fn emit(&self) {
        info!(
            audit.instance_id = %self.instance_id,
            audit.total = ?self.total,
            audit.interpretation = ?self.interpretation,
            "instance evaluated"
        );
    }
}
