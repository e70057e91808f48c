//! # certa-core
//!
//! Foundation crate for the Certa diagnostic engine.
//! Defines identifiers, knowledge and verdict models, the certainty factor
//! type, errors, config, tracing setup, and the traits other crates plug into.

pub mod config;
pub mod confidence;
pub mod constants;
pub mod errors;
pub mod ids;
pub mod models;
pub mod tracing_setup;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::CertaConfig;
pub use confidence::CertaintyFactor;
pub use errors::{CertaError, CertaResult};
pub use ids::{BandCode, HypothesisCode, HypothesisId, QuestionId, SymptomCode, SymptomId};
pub use models::{Hypothesis, RatingMode, RatingSet, Rule, Symptom, Verdict};
