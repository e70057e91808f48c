use serde::{Deserialize, Serialize};

use crate::ids::{QuestionId, SymptomCode, SymptomId};

/// A question presented to the user about one symptom.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub symptom_id: SymptomId,
    pub text: String,
}

/// A question joined with the symptom it validates, ready to show.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionPrompt {
    pub question_id: QuestionId,
    pub text: String,
    pub symptom_id: SymptomId,
    pub symptom_code: SymptomCode,
    pub symptom_description: String,
    pub expert_weight: f64,
}
