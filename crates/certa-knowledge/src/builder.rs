//! Knowledge-base construction and load-time validation.

use std::collections::HashSet;

use certa_core::confidence::validate_unit;
use certa_core::errors::KnowledgeError;
use certa_core::ids::SymptomCode;
use certa_core::models::{Hypothesis, Question, Rule, Symptom};

use crate::base::KnowledgeBase;
use crate::fingerprint;

/// Collects knowledge entries and validates them as a whole in [`build`].
///
/// [`build`]: KnowledgeBaseBuilder::build
#[derive(Debug, Default)]
pub struct KnowledgeBaseBuilder {
    symptoms: Vec<Symptom>,
    questions: Vec<Question>,
    hypotheses: Vec<Hypothesis>,
}

impl KnowledgeBaseBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn symptom(mut self, symptom: Symptom) -> Self {
        self.symptoms.push(symptom);
        self
    }

    pub fn question(mut self, question: Question) -> Self {
        self.questions.push(question);
        self
    }

    /// Add a hypothesis. Rules are renumbered 1..n in the given order.
    pub fn hypothesis(mut self, mut hypothesis: Hypothesis) -> Self {
        for (index, rule) in hypothesis.rules.iter_mut().enumerate() {
            rule.number = index + 1;
        }
        self.hypotheses.push(hypothesis);
        self
    }

    /// Convenience for rule tables written as plain code lists.
    pub fn rules_from_codes(codes: Vec<Vec<SymptomCode>>) -> Vec<Rule> {
        codes
            .into_iter()
            .enumerate()
            .map(|(index, symptoms)| Rule {
                number: index + 1,
                symptoms,
            })
            .collect()
    }

    /// Validate every cross-reference and produce the immutable base.
    pub fn build(self) -> Result<KnowledgeBase, KnowledgeError> {
        self.validate_symptoms()?;
        self.validate_questions()?;
        self.validate_hypotheses()?;

        let fingerprint = fingerprint::compute(&self.symptoms, &self.questions, &self.hypotheses)?;
        Ok(KnowledgeBase::from_parts(
            self.symptoms,
            self.questions,
            self.hypotheses,
            fingerprint,
        ))
    }

    fn validate_symptoms(&self) -> Result<(), KnowledgeError> {
        let mut ids = HashSet::new();
        let mut codes = HashSet::new();
        for symptom in &self.symptoms {
            if !ids.insert(symptom.id) {
                return Err(KnowledgeError::DuplicateSymptomId { id: symptom.id });
            }
            if !codes.insert(symptom.code) {
                return Err(KnowledgeError::DuplicateSymptomCode { code: symptom.code });
            }
            if validate_unit(symptom.expert_weight, "expert_weight").is_err() {
                return Err(KnowledgeError::InvalidWeight {
                    code: symptom.code,
                    weight: symptom.expert_weight,
                });
            }
        }
        Ok(())
    }

    fn validate_questions(&self) -> Result<(), KnowledgeError> {
        let symptom_ids: HashSet<_> = self.symptoms.iter().map(|s| s.id).collect();
        let mut ids = HashSet::new();
        for question in &self.questions {
            if !ids.insert(question.id) {
                return Err(KnowledgeError::DuplicateQuestionId { id: question.id });
            }
            if !symptom_ids.contains(&question.symptom_id) {
                return Err(KnowledgeError::UnknownSymptomInQuestion {
                    question_id: question.id,
                    symptom_id: question.symptom_id,
                });
            }
        }
        Ok(())
    }

    fn validate_hypotheses(&self) -> Result<(), KnowledgeError> {
        let symptom_codes: HashSet<_> = self.symptoms.iter().map(|s| s.code).collect();
        let mut ids = HashSet::new();
        let mut codes = HashSet::new();

        for hypothesis in &self.hypotheses {
            if !ids.insert(hypothesis.id) {
                return Err(KnowledgeError::DuplicateHypothesisId { id: hypothesis.id });
            }
            if !codes.insert(hypothesis.code) {
                return Err(KnowledgeError::DuplicateHypothesisCode {
                    code: hypothesis.code,
                });
            }
            if let Some(range) = hypothesis.thresholds {
                if !range.is_valid() {
                    return Err(KnowledgeError::InvalidThresholds {
                        hypothesis: hypothesis.code,
                        min: range.min,
                        max: range.max,
                    });
                }
            }
            if hypothesis.rules.is_empty() {
                return Err(KnowledgeError::NoRules {
                    hypothesis: hypothesis.code,
                });
            }

            for rule in &hypothesis.rules {
                if rule.symptoms.is_empty() {
                    return Err(KnowledgeError::EmptyRule {
                        hypothesis: hypothesis.code,
                        rule_number: rule.number,
                    });
                }
                let mut seen = HashSet::new();
                for &code in &rule.symptoms {
                    if !symptom_codes.contains(&code) {
                        return Err(KnowledgeError::UnknownSymptomInRule {
                            hypothesis: hypothesis.code,
                            rule_number: rule.number,
                            code,
                        });
                    }
                    if !seen.insert(code) {
                        return Err(KnowledgeError::DuplicateSymptomInRule {
                            hypothesis: hypothesis.code,
                            rule_number: rule.number,
                            code,
                        });
                    }
                }
            }

            if let Some(&code) = hypothesis
                .dominant_symptoms
                .iter()
                .find(|code| !symptom_codes.contains(code))
            {
                return Err(KnowledgeError::UnknownDominantSymptom {
                    hypothesis: hypothesis.code,
                    code,
                });
            }
        }
        Ok(())
    }
}
