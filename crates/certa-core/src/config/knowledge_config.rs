use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Knowledge-base source configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct KnowledgeConfig {
    /// TOML knowledge-base file. `None` selects the built-in catalog.
    /// Relative paths resolve against the project root.
    pub path: Option<PathBuf>,
}
