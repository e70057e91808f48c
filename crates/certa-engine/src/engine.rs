use std::collections::BTreeSet;
use std::path::Path;
use std::sync::Arc;

use rayon::prelude::*;
use tracing::{debug, warn};

use certa_core::config::{CertaConfig, ScoringConfig};
use certa_core::confidence::CertaintyFactor;
use certa_core::errors::{CertaResult, EvaluationError};
use certa_core::ids::{HypothesisCode, HypothesisId, SymptomCode, SymptomId};
use certa_core::models::{
    Assessment, RatingMode, RatingSet, RuleMatch, SymptomContribution, Verdict,
};
use certa_core::traits::{IHypothesisEvaluator, IKnowledgeSource};
use certa_knowledge::KnowledgeBase;

use crate::bands::classify;
use crate::formula::{combine, combine_signed_symptom_cf, combine_symptom_cf};
use crate::rule_eval::evaluate_rule;

/// Scores hypotheses against user ratings using a shared, immutable
/// knowledge source.
///
/// Cheap to clone; clones share the same knowledge source.
#[derive(Clone)]
pub struct CertaintyEngine {
    source: Arc<dyn IKnowledgeSource>,
    config: ScoringConfig,
}

impl CertaintyEngine {
    pub fn new(source: Arc<dyn IKnowledgeSource>, config: ScoringConfig) -> Self {
        Self { source, config }
    }

    /// Engine over a loaded knowledge base with default scoring settings.
    pub fn with_knowledge_base(kb: KnowledgeBase) -> Self {
        Self::new(Arc::new(kb), ScoringConfig::default())
    }

    /// Load the configured knowledge base and build an engine over it.
    pub fn from_config(config: &CertaConfig, root: &Path) -> CertaResult<Self> {
        let kb = KnowledgeBase::from_config(config, root)?;
        Ok(Self::new(Arc::new(kb), config.scoring.clone()))
    }

    pub fn source(&self) -> &dyn IKnowledgeSource {
        self.source.as_ref()
    }

    pub fn rating_mode(&self) -> RatingMode {
        self.config.rating_mode
    }

    /// Evaluate every rule of a hypothesis and keep the strongest match.
    ///
    /// Every rating is checked against the configured [`RatingMode`] before
    /// anything is combined. An unknown hypothesis yields a zero verdict in
    /// band P0.
    pub fn evaluate_hypothesis(&self, hypothesis_id: HypothesisId, ratings: &RatingSet) -> CertaResult<Verdict> {
        let _span = certa_core::evaluation_span!(hypothesis_id, ratings.len()).entered();
        ratings.validate(self.config.rating_mode)?;
        Ok(self.evaluate_validated(hypothesis_id, ratings))
    }

    fn evaluate_validated(&self, hypothesis_id: HypothesisId, ratings: &RatingSet) -> Verdict {
        let Some(hypothesis) = self.source.hypothesis(hypothesis_id) else {
            warn!(%hypothesis_id, "unknown hypothesis, returning zero verdict");
            return self.verdict(hypothesis_id, None, String::new(), Vec::new(), Vec::new());
        };

        let matched_rules: Vec<RuleMatch> = hypothesis
            .rules
            .iter()
            .map(|rule| evaluate_rule(rule, ratings, self.source.as_ref()))
            .filter(|rule_match| rule_match.matched)
            .collect();

        let details = self.symptom_details(&hypothesis.required_symptoms(), ratings);
        self.verdict(
            hypothesis_id,
            Some(hypothesis.code),
            hypothesis.name.clone(),
            matched_rules,
            details,
        )
    }

    /// Evaluate a hypothesis from answers keyed by numeric symptom id.
    ///
    /// Answers for ids missing from the catalog are skipped. A later answer
    /// for the same symptom replaces an earlier one.
    pub fn evaluate_responses(
        &self,
        hypothesis_id: HypothesisId,
        responses: &[(SymptomId, f64)],
    ) -> CertaResult<Verdict> {
        let ratings = self.ratings_from_responses(responses)?;
        self.evaluate_hypothesis(hypothesis_id, &ratings)
    }

    /// Fold every answered symptom, regardless of rules, into one assessment.
    ///
    /// Contributions are folded left to right in answer order.
    pub fn aggregate(&self, ratings: &RatingSet) -> CertaResult<Assessment> {
        let _span = certa_core::aggregation_span!(ratings.len()).entered();
        ratings.validate(self.config.rating_mode)?;

        let mut details = Vec::with_capacity(ratings.len());
        for (code, user_confidence) in ratings.iter() {
            let Some(symptom) = self.source.symptom_by_code(code) else {
                debug!(%code, "skipping rating for symptom not in catalog");
                continue;
            };
            let combined = match self.config.rating_mode {
                RatingMode::Unit => combine_symptom_cf(symptom.expert_weight, user_confidence)?,
                RatingMode::Signed => {
                    combine_signed_symptom_cf(symptom.expert_weight, user_confidence)?
                }
            };
            details.push(SymptomContribution {
                symptom_id: symptom.id,
                code,
                description: symptom.description.clone(),
                expert_weight: symptom.expert_weight,
                user_confidence,
                combined,
            });
        }

        let cfs: Vec<f64> = details.iter().map(|d| d.combined).collect();
        let confidence = combine(&cfs);
        let percentage = CertaintyFactor::new(confidence).percentage();
        let band = classify(percentage);
        debug!(confidence, band = %band.code, "aggregate computed");

        Ok(Assessment {
            confidence,
            percentage,
            band: band.code,
            label: band.label.to_string(),
            recommendation: band.recommendation.to_string(),
            symptom_details: details,
        })
    }

    /// Evaluate several hypotheses in parallel. Output order matches input.
    pub fn evaluate_all(&self, hypothesis_ids: &[HypothesisId], ratings: &RatingSet) -> CertaResult<Vec<Verdict>> {
        ratings.validate(self.config.rating_mode)?;
        Ok(hypothesis_ids
            .par_iter()
            .map(|&id| {
                let _span = certa_core::evaluation_span!(id, ratings.len()).entered();
                self.evaluate_validated(id, ratings)
            })
            .collect())
    }

    /// Evaluate every hypothesis of the knowledge source, in declaration order.
    pub fn evaluate_every_hypothesis(&self, ratings: &RatingSet) -> CertaResult<Vec<Verdict>> {
        let ids: Vec<HypothesisId> = self.source.hypotheses().iter().map(|h| h.id).collect();
        self.evaluate_all(&ids, ratings)
    }

    fn ratings_from_responses(&self, responses: &[(SymptomId, f64)]) -> Result<RatingSet, EvaluationError> {
        let mut ratings = RatingSet::new();
        for &(symptom_id, confidence) in responses {
            match self.source.symptom_by_id(symptom_id) {
                Some(symptom) => ratings.insert(symptom.code, confidence, self.config.rating_mode)?,
                None => debug!(%symptom_id, "skipping response for unknown symptom id"),
            }
        }
        Ok(ratings)
    }

    /// Contribution rows for the rated symptoms in `codes`, in code order.
    fn symptom_details(&self, codes: &BTreeSet<SymptomCode>, ratings: &RatingSet) -> Vec<SymptomContribution> {
        codes
            .iter()
            .filter_map(|&code| {
                let user_confidence = ratings.get(code)?;
                let symptom = self.source.symptom_by_code(code)?;
                Some(SymptomContribution {
                    symptom_id: symptom.id,
                    code,
                    description: symptom.description.clone(),
                    expert_weight: symptom.expert_weight,
                    user_confidence,
                    combined: symptom.expert_weight * user_confidence,
                })
            })
            .collect()
    }

    fn verdict(
        &self,
        hypothesis_id: HypothesisId,
        hypothesis_code: Option<HypothesisCode>,
        hypothesis_name: String,
        matched_rules: Vec<RuleMatch>,
        symptom_details: Vec<SymptomContribution>,
    ) -> Verdict {
        let confidence = matched_rules
            .iter()
            .map(|rule_match| rule_match.confidence)
            .fold(0.0, f64::max);
        let percentage = CertaintyFactor::new(confidence).percentage();
        let band = classify(percentage);

        Verdict {
            hypothesis_id,
            hypothesis_code,
            hypothesis_name,
            confidence,
            percentage,
            band: band.code,
            label: band.label.to_string(),
            recommendation: band.recommendation.to_string(),
            matched_rules,
            symptom_details,
            validated: confidence > 0.0,
            knowledge_fingerprint: self.source.fingerprint().to_string(),
        }
    }
}

impl IHypothesisEvaluator for CertaintyEngine {
    fn evaluate(&self, hypothesis_id: HypothesisId, ratings: &RatingSet) -> CertaResult<Verdict> {
        self.evaluate_hypothesis(hypothesis_id, ratings)
    }
}

/// The verdict with the highest confidence. Ties go to the earliest.
pub fn best_verdict(verdicts: &[Verdict]) -> Option<&Verdict> {
    verdicts.iter().fold(None, |best: Option<&Verdict>, candidate| match best {
        Some(current) if current.confidence >= candidate.confidence => Some(current),
        _ => Some(candidate),
    })
}
