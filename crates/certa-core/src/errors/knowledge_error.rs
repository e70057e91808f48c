//! Knowledge-base load and validation errors.

use super::error_code::{self, CertaErrorCode};
use super::CodeError;
use crate::ids::{HypothesisCode, HypothesisId, QuestionId, SymptomCode, SymptomId};

#[derive(Debug, thiserror::Error)]
pub enum KnowledgeError {
    #[error("knowledge file not found: {path}")]
    FileNotFound { path: String },

    #[error("knowledge parse error in {source_name}: {message}")]
    ParseError { source_name: String, message: String },

    #[error("malformed code: {0}")]
    MalformedCode(#[from] CodeError),

    #[error("duplicate symptom id {id}")]
    DuplicateSymptomId { id: SymptomId },

    #[error("duplicate symptom code {code}")]
    DuplicateSymptomCode { code: SymptomCode },

    #[error("duplicate hypothesis id {id}")]
    DuplicateHypothesisId { id: HypothesisId },

    #[error("duplicate hypothesis code {code}")]
    DuplicateHypothesisCode { code: HypothesisCode },

    #[error("duplicate question id {id}")]
    DuplicateQuestionId { id: QuestionId },

    #[error("expert weight {weight} of symptom {code} is outside [0, 1]")]
    InvalidWeight { code: SymptomCode, weight: f64 },

    #[error("hypothesis {hypothesis} has no rules")]
    NoRules { hypothesis: HypothesisCode },

    #[error("rule {rule_number} of hypothesis {hypothesis} has no symptoms")]
    EmptyRule {
        hypothesis: HypothesisCode,
        rule_number: usize,
    },

    #[error("rule {rule_number} of hypothesis {hypothesis} references unknown symptom {code}")]
    UnknownSymptomInRule {
        hypothesis: HypothesisCode,
        rule_number: usize,
        code: SymptomCode,
    },

    #[error("rule {rule_number} of hypothesis {hypothesis} lists symptom {code} more than once")]
    DuplicateSymptomInRule {
        hypothesis: HypothesisCode,
        rule_number: usize,
        code: SymptomCode,
    },

    #[error("hypothesis {hypothesis} lists unknown dominant symptom {code}")]
    UnknownDominantSymptom {
        hypothesis: HypothesisCode,
        code: SymptomCode,
    },

    #[error("question {question_id} references unknown symptom id {symptom_id}")]
    UnknownSymptomInQuestion {
        question_id: QuestionId,
        symptom_id: SymptomId,
    },

    #[error("failed to fingerprint knowledge base: {message}")]
    Fingerprint { message: String },

    #[error("thresholds of hypothesis {hypothesis} are invalid: [{min}, {max}]")]
    InvalidThresholds {
        hypothesis: HypothesisCode,
        min: f64,
        max: f64,
    },
}

impl CertaErrorCode for KnowledgeError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::FileNotFound { .. } | Self::ParseError { .. } => error_code::KNOWLEDGE_PARSE_ERROR,
            Self::MalformedCode(e) => e.error_code(),
            _ => error_code::KNOWLEDGE_ERROR,
        }
    }
}
