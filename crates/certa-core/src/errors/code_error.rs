use super::error_code::{self, CertaErrorCode};

/// Identifier parsing errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodeError {
    #[error("malformed {kind} code {text:?}: expected {expected}")]
    Malformed {
        kind: &'static str,
        text: String,
        expected: &'static str,
    },
}

impl CertaErrorCode for CodeError {
    fn error_code(&self) -> &'static str {
        error_code::MALFORMED_CODE
    }
}
