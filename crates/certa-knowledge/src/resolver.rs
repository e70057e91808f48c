//! Backward-chaining resolver: from a hypothesis down to the symptoms (and
//! questions) needed to confirm or reject it.

use std::collections::BTreeSet;

use tracing::warn;

use certa_core::ids::{HypothesisId, SymptomCode};
use certa_core::models::QuestionPrompt;
use certa_core::traits::IKnowledgeSource;

use crate::base::KnowledgeBase;

/// Symptom codes referenced by any rule of the hypothesis, deduplicated.
///
/// An unknown hypothesis yields an empty set rather than an error. The
/// lookup miss is logged at `warn` so an upstream id bug stays visible.
pub fn required_symptoms(source: &dyn IKnowledgeSource, hypothesis_id: HypothesisId) -> BTreeSet<SymptomCode> {
    match source.hypothesis(hypothesis_id) {
        Some(hypothesis) => hypothesis.required_symptoms(),
        None => {
            warn!(%hypothesis_id, "unknown hypothesis, resolving to no symptoms");
            BTreeSet::new()
        }
    }
}

/// Union of the required symptoms of several hypotheses.
pub fn required_symptoms_for_all(
    source: &dyn IKnowledgeSource,
    hypothesis_ids: &[HypothesisId],
) -> BTreeSet<SymptomCode> {
    hypothesis_ids
        .iter()
        .flat_map(|&id| required_symptoms(source, id))
        .collect()
}

/// One question per required symptom, in symptom-code order.
///
/// When several questions target the same symptom, the first by declaration
/// order wins. Symptoms without any question are skipped.
pub fn questions_for(kb: &KnowledgeBase, hypothesis_id: HypothesisId) -> Vec<QuestionPrompt> {
    required_symptoms(kb, hypothesis_id)
        .into_iter()
        .filter_map(|code| {
            let symptom = kb.symptom_by_code(code)?;
            let question = kb.first_question_for(symptom.id)?;
            Some(QuestionPrompt {
                question_id: question.id,
                text: question.text.clone(),
                symptom_id: symptom.id,
                symptom_code: symptom.code,
                symptom_description: symptom.description.clone(),
                expert_weight: symptom.expert_weight,
            })
        })
        .collect()
}
