use serde::{Deserialize, Serialize};

use crate::models::RatingMode;

/// Scoring configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Accepted domain of user confidence values.
    pub rating_mode: RatingMode,
}
