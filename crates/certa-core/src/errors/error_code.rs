//! Stable error codes for callers across a process or language boundary.

/// Every error enum implements this to expose a structured code string
/// that does not change when message wording does.
pub trait CertaErrorCode {
    /// Returns the error code string (e.g., "INVALID_INPUT").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted error string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const INVALID_INPUT: &str = "INVALID_INPUT";
pub const MALFORMED_CODE: &str = "MALFORMED_CODE";
pub const KNOWLEDGE_ERROR: &str = "KNOWLEDGE_ERROR";
pub const KNOWLEDGE_PARSE_ERROR: &str = "KNOWLEDGE_PARSE_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
