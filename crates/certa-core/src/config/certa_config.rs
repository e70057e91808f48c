//! Top-level Certa configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{KnowledgeConfig, ObservabilityConfig, ScoringConfig};
use crate::constants::PROJECT_CONFIG_FILE;
use crate::errors::ConfigError;

pub const ENV_KNOWLEDGE_PATH: &str = "CERTA_KNOWLEDGE_PATH";
pub const ENV_RATING_MODE: &str = "CERTA_RATING_MODE";
pub const ENV_LOG_JSON: &str = "CERTA_LOG_JSON";

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`CERTA_*`)
/// 2. Project config (`certa.toml` in the project root)
/// 3. Compiled defaults
///
/// Sections missing from the file keep their defaults.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CertaConfig {
    pub knowledge: KnowledgeConfig,
    pub scoring: ScoringConfig,
    pub observability: ObservabilityConfig,
}

impl CertaConfig {
    /// Load configuration for the project rooted at `root`.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        let mut config = if project_config_path.exists() {
            Self::from_file(&project_config_path)?
        } else {
            Self::default()
        };

        config.apply_env_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        Self::parse(toml_str, "<string>")
    }

    /// Load configuration from a TOML file, without env overrides.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        Self::parse(&content, &path.display().to_string())
    }

    fn parse(toml_str: &str, origin: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: origin.to_string(),
            message: e.to_string(),
        })
    }

    /// Apply `CERTA_*` overrides read through `lookup`.
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup(ENV_KNOWLEDGE_PATH) {
            self.knowledge.path = Some(PathBuf::from(path));
        }
        if let Some(mode) = lookup(ENV_RATING_MODE) {
            self.scoring.rating_mode = mode.parse().map_err(|message| ConfigError::InvalidValue {
                field: ENV_RATING_MODE.to_string(),
                message,
            })?;
        }
        if let Some(json) = lookup(ENV_LOG_JSON) {
            self.observability.json = match json.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" => true,
                "0" | "false" | "no" => false,
                other => {
                    return Err(ConfigError::InvalidValue {
                        field: ENV_LOG_JSON.to_string(),
                        message: format!("expected a boolean, got {other:?}"),
                    })
                }
            };
        }
        Ok(())
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(path) = &self.knowledge.path {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: "knowledge.path".to_string(),
                    message: "must not be empty".to_string(),
                });
            }
        }
        if self.observability.log_filter.trim().is_empty() {
            return Err(ConfigError::ValidationFailed {
                field: "observability.log_filter".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Knowledge-base file resolved against `root`, if one is configured.
    pub fn knowledge_path(&self, root: &Path) -> Option<PathBuf> {
        self.knowledge
            .path
            .as_ref()
            .map(|path| if path.is_absolute() { path.clone() } else { root.join(path) })
    }
}
