//! Span definitions per operation: knowledge load, hypothesis evaluation,
//! rule-independent aggregation.

/// Create a knowledge-load span.
#[macro_export]
macro_rules! knowledge_load_span {
    ($source:expr) => {
        tracing::info_span!("certa.knowledge_load", source = %$source)
    };
}

/// Create a hypothesis-evaluation span.
#[macro_export]
macro_rules! evaluation_span {
    ($hypothesis_id:expr, $rating_count:expr) => {
        tracing::debug_span!(
            "certa.evaluation",
            hypothesis_id = %$hypothesis_id,
            rating_count = $rating_count
        )
    };
}

/// Create an aggregation span.
#[macro_export]
macro_rules! aggregation_span {
    ($answer_count:expr) => {
        tracing::debug_span!("certa.aggregation", answer_count = $answer_count)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const KNOWLEDGE_LOAD: &str = "certa.knowledge_load";
    pub const EVALUATION: &str = "certa.evaluation";
    pub const AGGREGATION: &str = "certa.aggregation";
}
