mod evaluator;
mod knowledge_source;

pub use evaluator::IHypothesisEvaluator;
pub use knowledge_source::IKnowledgeSource;
