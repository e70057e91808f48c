use crate::ids::{HypothesisId, SymptomCode, SymptomId};
use crate::models::{Hypothesis, Symptom};

/// Read-only view of the symptom catalog and rule table.
///
/// Implemented by the in-memory knowledge base; a storage collaborator can
/// supply its own implementation as long as it is immutable while shared.
pub trait IKnowledgeSource: Send + Sync {
    fn symptom_by_code(&self, code: SymptomCode) -> Option<&Symptom>;

    fn symptom_by_id(&self, id: SymptomId) -> Option<&Symptom>;

    fn hypothesis(&self, id: HypothesisId) -> Option<&Hypothesis>;

    /// All hypotheses in declaration order.
    fn hypotheses(&self) -> &[Hypothesis];

    /// Content fingerprint identifying this knowledge-base version.
    fn fingerprint(&self) -> &str;
}
