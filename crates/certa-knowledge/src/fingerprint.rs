//! Content fingerprint of a knowledge base.
//!
//! Verdicts carry the fingerprint of the knowledge base they were computed
//! against, so a stored result can be traced back to the exact weights and
//! rules in force at the time.

use serde::Serialize;

use certa_core::errors::KnowledgeError;
use certa_core::models::{Hypothesis, Question, Symptom};

#[derive(Serialize)]
struct Content<'a> {
    symptoms: &'a [Symptom],
    questions: &'a [Question],
    hypotheses: &'a [Hypothesis],
}

/// blake3 hex digest of the canonical JSON serialization.
pub fn compute(
    symptoms: &[Symptom],
    questions: &[Question],
    hypotheses: &[Hypothesis],
) -> Result<String, KnowledgeError> {
    let serialized = serde_json::to_string(&Content {
        symptoms,
        questions,
        hypotheses,
    })
    .map_err(|e| KnowledgeError::Fingerprint {
        message: e.to_string(),
    })?;
    Ok(blake3::hash(serialized.as_bytes()).to_hex().to_string())
}
