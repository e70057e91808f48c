//! Error handling for Certa.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod certa_error;
pub mod code_error;
pub mod config_error;
pub mod error_code;
pub mod evaluation_error;
pub mod knowledge_error;

pub use certa_error::{CertaError, CertaResult};
pub use code_error::CodeError;
pub use config_error::ConfigError;
pub use error_code::CertaErrorCode;
pub use evaluation_error::EvaluationError;
pub use knowledge_error::KnowledgeError;
