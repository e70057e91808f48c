/// Scale factor from a certainty factor to a percentage.
pub const PERCENT_SCALE: f64 = 100.0;

/// Project config file name, resolved against the project root.
pub const PROJECT_CONFIG_FILE: &str = "certa.toml";

/// Environment variable carrying the tracing filter.
pub const LOG_ENV_VAR: &str = "CERTA_LOG";
