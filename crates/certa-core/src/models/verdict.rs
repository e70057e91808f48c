use serde::{Deserialize, Serialize};

use crate::ids::{BandCode, HypothesisCode, HypothesisId, SymptomCode, SymptomId};

/// Per-symptom detail row: expert weight, user confidence, and their product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SymptomContribution {
    pub symptom_id: SymptomId,
    pub code: SymptomCode,
    pub description: String,
    pub expert_weight: f64,
    pub user_confidence: f64,
    pub combined: f64,
}

/// Outcome of evaluating one rule against a rating set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleMatch {
    pub rule_number: usize,
    pub symptoms: Vec<SymptomCode>,
    pub matched: bool,
    /// Combined confidence in [0, 1]. Zero when the rule did not match.
    pub confidence: f64,
    /// First code that was missing or not endorsed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub missing: Option<SymptomCode>,
}

impl RuleMatch {
    pub fn unmatched(rule_number: usize, symptoms: Vec<SymptomCode>, missing: SymptomCode) -> Self {
        Self {
            rule_number,
            symptoms,
            matched: false,
            confidence: 0.0,
            missing: Some(missing),
        }
    }
}

/// Final verdict of one hypothesis evaluation, handed back to the caller
/// for persistence or report rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Verdict {
    pub hypothesis_id: HypothesisId,
    /// `None` when the hypothesis id is not in the knowledge base.
    pub hypothesis_code: Option<HypothesisCode>,
    pub hypothesis_name: String,
    /// Maximum confidence across matched rules, 0 when none matched.
    pub confidence: f64,
    pub percentage: f64,
    pub band: BandCode,
    pub label: String,
    pub recommendation: String,
    /// Only the rules that matched, in declaration order.
    pub matched_rules: Vec<RuleMatch>,
    pub symptom_details: Vec<SymptomContribution>,
    /// True when at least one rule matched with positive confidence.
    pub validated: bool,
    pub knowledge_fingerprint: String,
}

/// Rule-independent assessment over every answered symptom.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    pub confidence: f64,
    pub percentage: f64,
    pub band: BandCode,
    pub label: String,
    pub recommendation: String,
    pub symptom_details: Vec<SymptomContribution>,
}
