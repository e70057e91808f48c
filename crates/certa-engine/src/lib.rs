//! # certa-engine
//!
//! Certainty-factor scoring over a knowledge base.
//!
//! ## Pipeline
//! 1. **Symptom CF**: expert weight × user confidence
//! 2. **Rule CF**: left fold of the symptom CFs of a fully endorsed rule
//! 3. **Hypothesis CF**: maximum over matched rules
//! 4. **Band**: percentage mapped to P0..P3 with a recommendation
//!
//! Every step is a pure function of its inputs; identical inputs produce
//! bit-identical verdicts.

pub mod bands;
pub mod engine;
pub mod formula;
pub mod rule_eval;

pub use bands::{all_bands, classify, DiagnosticBand};
pub use engine::{best_verdict, CertaintyEngine};
pub use formula::{combine, combine_signed_symptom_cf, combine_symptom_cf, to_percentage};
pub use rule_eval::evaluate_rule;
