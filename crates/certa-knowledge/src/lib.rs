//! # certa-knowledge
//!
//! The knowledge base: symptom catalog, question catalog, and the rule
//! table mapping each hypothesis to its alternative symptom conjunctions.
//!
//! Loaded once at startup (TOML file or the built-in catalog), validated,
//! fingerprinted, and then shared immutably. The resolver walks the rule
//! table backwards from a hypothesis to the symptoms that must be asked.

pub mod base;
pub mod builder;
pub mod builtin;
pub mod fingerprint;
pub mod loader;
pub mod resolver;

pub use base::KnowledgeBase;
pub use builder::KnowledgeBaseBuilder;
pub use loader::KnowledgeFile;
