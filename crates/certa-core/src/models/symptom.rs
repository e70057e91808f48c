use serde::{Deserialize, Serialize};

use crate::ids::{SymptomCode, SymptomId};

/// A symptom in the knowledge base. Immutable reference data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Symptom {
    pub id: SymptomId,
    pub code: SymptomCode,
    pub description: String,
    /// A priori confidence, assigned by domain experts, that the symptom
    /// indicates the condition. In [0, 1].
    pub expert_weight: f64,
}
