//! Built-in game-addiction knowledge base.

use certa_core::errors::KnowledgeError;

use crate::base::KnowledgeBase;

/// Source name used in logs and parse errors.
pub const SOURCE_NAME: &str = "builtin:game_addiction";

/// The catalog, as shipped.
pub const GAME_ADDICTION_TOML: &str = include_str!("../knowledge/game_addiction.toml");

impl KnowledgeBase {
    /// The built-in game-addiction catalog: twelve symptoms (G1..G12),
    /// one question each, and three hypotheses (P1 mild, P2 moderate,
    /// P3 severe) with cumulative rule chains.
    pub fn builtin() -> Result<Self, KnowledgeError> {
        Self::from_named_toml(GAME_ADDICTION_TOML, SOURCE_NAME)
    }
}
