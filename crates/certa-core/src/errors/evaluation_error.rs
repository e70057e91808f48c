//! Evaluation errors. Raised before any combination happens, so a caller
//! never persists a verdict computed from out-of-domain input.

use super::error_code::{self, CertaErrorCode};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EvaluationError {
    #[error("invalid input for {field}: {value} is outside [{min}, {max}]")]
    InvalidInput {
        field: String,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("unknown rating scale answer: {text:?}")]
    UnknownScaleAnswer { text: String },
}

impl EvaluationError {
    pub fn invalid_input(field: impl Into<String>, value: f64, min: f64, max: f64) -> Self {
        Self::InvalidInput {
            field: field.into(),
            value,
            min,
            max,
        }
    }
}

impl CertaErrorCode for EvaluationError {
    fn error_code(&self) -> &'static str {
        error_code::INVALID_INPUT
    }
}
