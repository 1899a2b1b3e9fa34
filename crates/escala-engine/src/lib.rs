//! escala-engine
//!
//! Test administration and scoring rules for Escala questionnaires.
//! Pure logic on top of the escala-core vocabulary: per-type answer
//! validation, response accumulation, completion progress, lifecycle
//! state, and score computation under the template's strategy. No
//! ambient state — every function takes its template and responses as
//! explicit parameters.

pub mod error;
pub mod instance;
pub mod lifecycle;
pub mod progress;
pub mod responses;
pub mod rules;
pub mod scoring;

pub use error::EngineError;
pub use instance::{Evaluation, Submission, TestInstance};
pub use lifecycle::{InstanceState, Transition};
pub use progress::Progress;
pub use responses::ResponseStore;
pub use scoring::{Overrides, ScoreReport};
