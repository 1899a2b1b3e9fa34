//! escala-core
//!
//! Pure domain types for questionnaire administration: templates,
//! questions, options, groups, answers, scoring strategies, and
//! banding tables. No I/O and no engine logic — this is the shared
//! vocabulary of the Escala system.

pub mod error;
pub mod models;
