//! Test fixture loader for Certa knowledge bases and golden scenarios.
//!
//! Fixture data lives in the workspace-level `test-fixtures/` folder.
//! Helpers panic on missing or malformed files: they are for tests only.

use std::path::PathBuf;

use serde::de::DeserializeOwned;
use serde::Deserialize;

use certa_core::ids::{BandCode, HypothesisId, SymptomCode};
use certa_core::models::{RatingMode, RatingSet};

/// Root directory of the test-fixtures folder.
pub fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("test-fixtures")
}

/// Get the absolute path to a fixture file.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}

/// Check that a fixture file exists.
pub fn fixture_exists(relative_path: &str) -> bool {
    fixture_path(relative_path).exists()
}

/// Read a fixture file as text.
///
/// # Panics
/// Panics if the file doesn't exist.
pub fn load_text(relative_path: &str) -> String {
    let path = fixture_path(relative_path);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e))
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let content = load_text(relative_path);
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", relative_path, e))
}

/// List all files with `extension` in a fixture subdirectory, sorted.
pub fn list_fixtures(subdir: &str, extension: &str) -> Vec<PathBuf> {
    let dir = fixtures_root().join(subdir);
    if !dir.exists() {
        return Vec::new();
    }
    let mut files: Vec<PathBuf> = std::fs::read_dir(&dir)
        .unwrap_or_else(|e| panic!("Failed to read directory {}: {}", dir.display(), e))
        .filter_map(|entry| {
            let path = entry.ok()?.path();
            if path.extension().is_some_and(|ext| ext == extension) {
                Some(path)
            } else {
                None
            }
        })
        .collect();
    files.sort();
    files
}

/// Parse a symptom code, panicking on typos in test tables.
pub fn code(text: &str) -> SymptomCode {
    text.parse()
        .unwrap_or_else(|e| panic!("bad symptom code in test: {e}"))
}

/// Build a unit-mode rating set from `(code, confidence)` pairs.
pub fn ratings(pairs: &[(&str, f64)]) -> RatingSet {
    RatingSet::from_pairs(pairs.iter().map(|&(c, v)| (code(c), v)), RatingMode::Unit)
        .unwrap_or_else(|e| panic!("bad rating in test: {e}"))
}

/// An end-to-end scenario with its recorded outcome.
#[derive(Debug, Clone, Deserialize)]
pub struct GoldenScenario {
    pub description: String,
    /// Fixture-relative knowledge file, or `"builtin"`.
    pub knowledge: String,
    pub hypothesis_id: HypothesisId,
    pub ratings: RatingSet,
    pub expected: GoldenExpectation,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GoldenExpectation {
    pub confidence: f64,
    pub band: BandCode,
    pub matched_rules: Vec<usize>,
    pub validated: bool,
}

impl GoldenScenario {
    pub fn rating_set(&self) -> RatingSet {
        self.ratings
            .validate(RatingMode::Unit)
            .unwrap_or_else(|e| panic!("bad rating in scenario {:?}: {e}", self.description));
        self.ratings.clone()
    }
}

/// Load every golden scenario, sorted by file name.
pub fn golden_scenarios() -> Vec<(String, GoldenScenario)> {
    list_fixtures("golden", "json")
        .into_iter()
        .map(|path| {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            let scenario = load_fixture(&format!("golden/{name}"));
            (name, scenario)
        })
        .collect()
}
