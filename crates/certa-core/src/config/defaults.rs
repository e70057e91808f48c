//! Compiled defaults.

pub const DEFAULT_LOG_FILTER: &str = "certa=info";
pub const DEFAULT_LOG_JSON: bool = false;
