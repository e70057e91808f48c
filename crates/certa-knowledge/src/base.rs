use std::collections::HashMap;

use certa_core::ids::{HypothesisCode, HypothesisId, SymptomCode, SymptomId};
use certa_core::models::{Hypothesis, Question, Symptom};
use certa_core::traits::IKnowledgeSource;

/// Validated, immutable knowledge base.
///
/// Built only through [`crate::KnowledgeBaseBuilder`] (directly or via the
/// loader), so every rule references known symptoms and every identifier
/// is unique. Share it behind an `Arc`; nothing mutates it after load.
#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    symptoms: Vec<Symptom>,
    questions: Vec<Question>,
    hypotheses: Vec<Hypothesis>,
    symptom_by_code: HashMap<SymptomCode, usize>,
    symptom_by_id: HashMap<SymptomId, usize>,
    hypothesis_by_id: HashMap<HypothesisId, usize>,
    hypothesis_by_code: HashMap<HypothesisCode, usize>,
    fingerprint: String,
}

impl KnowledgeBase {
    /// Assemble from already-validated parts.
    pub(crate) fn from_parts(
        symptoms: Vec<Symptom>,
        questions: Vec<Question>,
        hypotheses: Vec<Hypothesis>,
        fingerprint: String,
    ) -> Self {
        let symptom_by_code = symptoms.iter().enumerate().map(|(i, s)| (s.code, i)).collect();
        let symptom_by_id = symptoms.iter().enumerate().map(|(i, s)| (s.id, i)).collect();
        let hypothesis_by_id = hypotheses.iter().enumerate().map(|(i, h)| (h.id, i)).collect();
        let hypothesis_by_code = hypotheses.iter().enumerate().map(|(i, h)| (h.code, i)).collect();
        Self {
            symptoms,
            questions,
            hypotheses,
            symptom_by_code,
            symptom_by_id,
            hypothesis_by_id,
            hypothesis_by_code,
            fingerprint,
        }
    }

    /// Symptoms in declaration order.
    pub fn symptoms(&self) -> &[Symptom] {
        &self.symptoms
    }

    /// Questions in declaration order.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn hypothesis_by_code(&self, code: HypothesisCode) -> Option<&Hypothesis> {
        self.hypothesis_by_code.get(&code).map(|&i| &self.hypotheses[i])
    }

    /// First question asked about `symptom_id`, by declaration order.
    pub fn first_question_for(&self, symptom_id: SymptomId) -> Option<&Question> {
        self.questions.iter().find(|q| q.symptom_id == symptom_id)
    }
}

impl IKnowledgeSource for KnowledgeBase {
    fn symptom_by_code(&self, code: SymptomCode) -> Option<&Symptom> {
        self.symptom_by_code.get(&code).map(|&i| &self.symptoms[i])
    }

    fn symptom_by_id(&self, id: SymptomId) -> Option<&Symptom> {
        self.symptom_by_id.get(&id).map(|&i| &self.symptoms[i])
    }

    fn hypothesis(&self, id: HypothesisId) -> Option<&Hypothesis> {
        self.hypothesis_by_id.get(&id).map(|&i| &self.hypotheses[i])
    }

    fn hypotheses(&self) -> &[Hypothesis] {
        &self.hypotheses
    }

    fn fingerprint(&self) -> &str {
        &self.fingerprint
    }
}
