//! escala-audit
//!
//! Structured audit events for administration lifecycle changes. The
//! engine stays pure and only reports transitions to its caller; the
//! host application builds these events from those reports and emits
//! them via `tracing`, where its alerting and notification
//! collaborators pick them up.

pub mod events;

pub use events::{EvaluationEvent, TransitionEvent};
