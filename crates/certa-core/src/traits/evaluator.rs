use crate::errors::CertaResult;
use crate::ids::HypothesisId;
use crate::models::{RatingSet, Verdict};

/// Hypothesis evaluation against a set of user ratings.
pub trait IHypothesisEvaluator: Send + Sync {
    /// Evaluate one hypothesis, returning its verdict. Fails if any rating
    /// lies outside the evaluator's rating domain.
    fn evaluate(&self, hypothesis_id: HypothesisId, ratings: &RatingSet) -> CertaResult<Verdict>;
}
