//! TOML knowledge-base files.
//!
//! ```toml
//! [[symptoms]]
//! id = 1
//! code = "G1"
//! description = "Plays longer than intended"
//! expert_weight = 0.8
//!
//! [[questions]]
//! id = 1
//! symptom_id = 1
//! text = "Do you often play longer than you planned?"
//!
//! [[hypotheses]]
//! id = 1
//! code = "P1"
//! name = "Mild game addiction"
//! description = "..."
//! thresholds = { min = 40.0, max = 60.0 }
//! dominant_symptoms = ["G1"]
//! rules = [["G1", "G5"], ["G1", "G5", "G10"]]
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use certa_core::config::CertaConfig;
use certa_core::errors::KnowledgeError;
use certa_core::ids::{HypothesisCode, HypothesisId, SymptomCode};
use certa_core::models::{Hypothesis, Question, Symptom, ThresholdRange};
use certa_core::traits::IKnowledgeSource;

use crate::base::KnowledgeBase;
use crate::builder::KnowledgeBaseBuilder;
use crate::builtin;

/// On-disk layout of a knowledge base.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KnowledgeFile {
    #[serde(default)]
    pub symptoms: Vec<Symptom>,
    #[serde(default)]
    pub questions: Vec<Question>,
    #[serde(default)]
    pub hypotheses: Vec<HypothesisEntry>,
}

/// A hypothesis as written in a file: rules are plain code lists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HypothesisEntry {
    pub id: HypothesisId,
    pub code: HypothesisCode,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub thresholds: Option<ThresholdRange>,
    #[serde(default)]
    pub dominant_symptoms: Vec<SymptomCode>,
    pub rules: Vec<Vec<SymptomCode>>,
}

impl KnowledgeFile {
    pub fn parse(toml_str: &str, source_name: &str) -> Result<Self, KnowledgeError> {
        toml::from_str(toml_str).map_err(|e| KnowledgeError::ParseError {
            source_name: source_name.to_string(),
            message: e.to_string(),
        })
    }

    /// Validate and turn the file into a knowledge base.
    pub fn into_knowledge_base(self) -> Result<KnowledgeBase, KnowledgeError> {
        let mut builder = KnowledgeBaseBuilder::new();
        for symptom in self.symptoms {
            builder = builder.symptom(symptom);
        }
        for question in self.questions {
            builder = builder.question(question);
        }
        for entry in self.hypotheses {
            builder = builder.hypothesis(Hypothesis {
                id: entry.id,
                code: entry.code,
                name: entry.name,
                description: entry.description,
                thresholds: entry.thresholds,
                dominant_symptoms: entry.dominant_symptoms,
                rules: KnowledgeBaseBuilder::rules_from_codes(entry.rules),
            });
        }
        builder.build()
    }
}

impl KnowledgeBase {
    /// Parse and validate a TOML knowledge base.
    pub fn from_toml(toml_str: &str) -> Result<Self, KnowledgeError> {
        Self::from_named_toml(toml_str, "<string>")
    }

    pub(crate) fn from_named_toml(toml_str: &str, source_name: &str) -> Result<Self, KnowledgeError> {
        KnowledgeFile::parse(toml_str, source_name)?.into_knowledge_base()
    }

    /// Load a TOML knowledge base from disk.
    pub fn load(path: &Path) -> Result<Self, KnowledgeError> {
        let source = path.display().to_string();
        let _span = certa_core::knowledge_load_span!(source).entered();

        let content = std::fs::read_to_string(path).map_err(|_| KnowledgeError::FileNotFound {
            path: source.clone(),
        })?;
        let kb = Self::from_named_toml(&content, &source)?;
        log_loaded(&kb, &source);
        Ok(kb)
    }

    /// Load the knowledge base selected by `config`: the configured file
    /// (relative to `root`) or the built-in catalog.
    ///
    /// Call once at startup and share the result.
    pub fn from_config(config: &CertaConfig, root: &Path) -> Result<Self, KnowledgeError> {
        match config.knowledge_path(root) {
            Some(path) => Self::load(&path),
            None => {
                let _span = certa_core::knowledge_load_span!(builtin::SOURCE_NAME).entered();
                let kb = Self::builtin()?;
                log_loaded(&kb, builtin::SOURCE_NAME);
                Ok(kb)
            }
        }
    }
}

fn log_loaded(kb: &KnowledgeBase, source: &str) {
    info!(
        source,
        symptoms = kb.symptoms().len(),
        questions = kb.questions().len(),
        hypotheses = kb.hypotheses().len(),
        fingerprint = kb.fingerprint(),
        "knowledge base loaded"
    );
}
