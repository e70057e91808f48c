use tracing::debug;

use certa_core::models::{RatingSet, Rule, RuleMatch};
use certa_core::traits::IKnowledgeSource;

use crate::formula::combine;

/// Evaluate one rule against the user's ratings.
///
/// The rule matches only when every code is rated strictly above zero and
/// present in the symptom catalog. Matched rules fold `weight × rating` in
/// rule order.
pub fn evaluate_rule(rule: &Rule, ratings: &RatingSet, catalog: &dyn IKnowledgeSource) -> RuleMatch {
    let mut cfs = Vec::with_capacity(rule.symptoms.len());
    for &code in &rule.symptoms {
        let rating = match ratings.get(code) {
            Some(value) if value > 0.0 => value,
            _ => {
                debug!(rule = rule.number, %code, "rule not matched: symptom not endorsed");
                return RuleMatch::unmatched(rule.number, rule.symptoms.clone(), code);
            }
        };
        let Some(symptom) = catalog.symptom_by_code(code) else {
            debug!(rule = rule.number, %code, "rule not matched: symptom not in catalog");
            return RuleMatch::unmatched(rule.number, rule.symptoms.clone(), code);
        };
        cfs.push(symptom.expert_weight * rating);
    }

    let confidence = combine(&cfs);
    debug!(rule = rule.number, confidence, "rule matched");
    RuleMatch {
        rule_number: rule.number,
        symptoms: rule.symptoms.clone(),
        matched: true,
        confidence,
        missing: None,
    }
}

