use super::error_code::CertaErrorCode;
use super::{CodeError, ConfigError, EvaluationError, KnowledgeError};

/// Top-level error. Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum CertaError {
    #[error("Evaluation error: {0}")]
    Evaluation(#[from] EvaluationError),

    #[error("Knowledge error: {0}")]
    Knowledge(#[from] KnowledgeError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Code error: {0}")]
    Code(#[from] CodeError),
}

impl CertaErrorCode for CertaError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Evaluation(e) => e.error_code(),
            Self::Knowledge(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
            Self::Code(e) => e.error_code(),
        }
    }
}

pub type CertaResult<T> = Result<T, CertaError>;
