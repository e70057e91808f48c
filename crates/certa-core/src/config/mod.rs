//! Configuration system for Certa.
//! TOML-based, 3-layer resolution: env > project > defaults.

pub mod certa_config;
pub mod defaults;
pub mod knowledge_config;
pub mod observability_config;
pub mod scoring_config;

pub use certa_config::CertaConfig;
pub use knowledge_config::KnowledgeConfig;
pub use observability_config::ObservabilityConfig;
pub use scoring_config::ScoringConfig;
