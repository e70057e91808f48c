use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::ids::{HypothesisCode, HypothesisId, SymptomCode};

/// A conjunction of symptom codes. Fires only when every code is endorsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    /// 1-based position within the owning hypothesis.
    pub number: usize,
    pub symptoms: Vec<SymptomCode>,
}

/// Inclusive percentage range a hypothesis claims, e.g. `[61, 80]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThresholdRange {
    pub min: f64,
    pub max: f64,
}

impl ThresholdRange {
    pub fn contains(&self, percentage: f64) -> bool {
        (self.min..=self.max).contains(&percentage)
    }

    pub fn is_valid(&self) -> bool {
        (0.0..=100.0).contains(&self.min)
            && (0.0..=100.0).contains(&self.max)
            && self.min <= self.max
    }
}

/// A candidate hypothesis and its alternative sufficient rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hypothesis {
    pub id: HypothesisId,
    pub code: HypothesisCode,
    pub name: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thresholds: Option<ThresholdRange>,
    /// Symptoms experts consider characteristic. Informational only.
    #[serde(default)]
    pub dominant_symptoms: Vec<SymptomCode>,
    pub rules: Vec<Rule>,
}

impl Hypothesis {
    /// Union of the symptom codes of every rule, deduplicated.
    pub fn required_symptoms(&self) -> BTreeSet<SymptomCode> {
        self.rules
            .iter()
            .flat_map(|rule| rule.symptoms.iter().copied())
            .collect()
    }

    /// Whether `percentage` falls inside the hypothesis' own threshold range.
    /// Hypotheses without explicit thresholds never claim a percentage.
    pub fn thresholds_contain(&self, percentage: f64) -> bool {
        self.thresholds
            .map(|range| range.contains(percentage))
            .unwrap_or(false)
    }
}
