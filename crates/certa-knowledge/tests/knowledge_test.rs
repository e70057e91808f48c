use std::path::Path;

use certa_core::config::CertaConfig;
use certa_core::errors::KnowledgeError;
use certa_core::ids::{HypothesisCode, HypothesisId, QuestionId, SymptomId};
use certa_core::traits::IKnowledgeSource;
use certa_knowledge::resolver::{questions_for, required_symptoms};
use certa_knowledge::KnowledgeBase;
use test_fixtures::{code, fixture_path, fixtures_root, load_text};

fn load_invalid(name: &str) -> KnowledgeError {
    KnowledgeBase::from_toml(&load_text(&format!("knowledge/invalid/{name}"))).unwrap_err()
}

// ── Built-in catalog ─────────────────────────────────────────────────────

#[test]
fn builtin_catalog_loads_with_expected_shape() {
    let kb = KnowledgeBase::builtin().unwrap();
    assert_eq!(kb.symptoms().len(), 12);
    assert_eq!(kb.questions().len(), 12);
    assert_eq!(kb.hypotheses().len(), 3);

    let severe = kb.hypothesis(HypothesisId(3)).unwrap();
    assert_eq!(severe.code.to_string(), "P3");
    assert_eq!(severe.rules.len(), 4);
    let numbers: Vec<usize> = severe.rules.iter().map(|r| r.number).collect();
    assert_eq!(numbers, vec![1, 2, 3, 4]);
}

#[test]
fn builtin_weights_match_catalog() {
    let kb = KnowledgeBase::builtin().unwrap();
    assert_eq!(kb.symptom_by_code(code("G1")).unwrap().expert_weight, 0.8);
    assert_eq!(kb.symptom_by_code(code("G5")).unwrap().expert_weight, 0.6);
    assert_eq!(kb.symptom_by_id(SymptomId(10)).unwrap().code, code("G10"));
}

#[test]
fn hypothesis_lookup_by_code_and_thresholds() {
    let kb = KnowledgeBase::builtin().unwrap();
    let moderate = kb
        .hypothesis_by_code("P2".parse::<HypothesisCode>().unwrap())
        .unwrap();
    assert_eq!(moderate.id, HypothesisId(2));
    assert!(moderate.thresholds_contain(61.0));
    assert!(moderate.thresholds_contain(80.0));
    assert!(!moderate.thresholds_contain(80.5));
}

// ── Fingerprint ──────────────────────────────────────────────────────────

#[test]
fn fingerprint_is_stable_across_loads() {
    let a = KnowledgeBase::builtin().unwrap();
    let b = KnowledgeBase::builtin().unwrap();
    assert_eq!(a.fingerprint(), b.fingerprint());
    assert_eq!(a.fingerprint().len(), 64);
}

#[test]
fn fingerprint_changes_with_weights() {
    let baseline = load_text("knowledge/single_rule.toml");
    let tweaked = baseline.replace("expert_weight = 0.6", "expert_weight = 0.5");
    let a = KnowledgeBase::from_toml(&baseline).unwrap();
    let b = KnowledgeBase::from_toml(&tweaked).unwrap();
    assert_ne!(a.fingerprint(), b.fingerprint());
}

// ── Validation ───────────────────────────────────────────────────────────

#[test]
fn rejects_rule_with_unknown_symptom() {
    let err = load_invalid("unknown_rule_symptom.toml");
    match err {
        KnowledgeError::UnknownSymptomInRule {
            rule_number, code: c, ..
        } => {
            assert_eq!(rule_number, 2);
            assert_eq!(c, code("G7"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn rejects_duplicate_symptom_code() {
    assert!(matches!(
        load_invalid("duplicate_symptom_code.toml"),
        KnowledgeError::DuplicateSymptomCode { .. }
    ));
}

#[test]
fn rejects_empty_rule() {
    assert!(matches!(
        load_invalid("empty_rule.toml"),
        KnowledgeError::EmptyRule { rule_number: 2, .. }
    ));
}

#[test]
fn rejects_weight_out_of_range() {
    assert!(matches!(
        load_invalid("weight_out_of_range.toml"),
        KnowledgeError::InvalidWeight { .. }
    ));
}

#[test]
fn rejects_malformed_code_at_parse_time() {
    match load_invalid("malformed_code.toml") {
        KnowledgeError::ParseError { message, .. } => assert!(message.contains("S1")),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn rejects_hypothesis_without_rules() {
    assert!(matches!(
        load_invalid("no_rules.toml"),
        KnowledgeError::NoRules { .. }
    ));
}

#[test]
fn rejects_question_for_unknown_symptom() {
    let toml = r#"
[[symptoms]]
id = 1
code = "G1"
description = "x"
expert_weight = 0.5

[[questions]]
id = 1
symptom_id = 9
text = "?"
"#;
    assert!(matches!(
        KnowledgeBase::from_toml(toml).unwrap_err(),
        KnowledgeError::UnknownSymptomInQuestion { .. }
    ));
}

#[test]
fn rejects_repeated_symptom_inside_one_rule() {
    let toml = r#"
[[symptoms]]
id = 1
code = "G1"
description = "x"
expert_weight = 0.5

[[hypotheses]]
id = 1
code = "P1"
name = "Mild"
rules = [["G1", "G1"]]
"#;
    assert!(matches!(
        KnowledgeBase::from_toml(toml).unwrap_err(),
        KnowledgeError::DuplicateSymptomInRule { .. }
    ));
}

#[test]
fn rejects_inverted_thresholds() {
    let toml = r#"
[[symptoms]]
id = 1
code = "G1"
description = "x"
expert_weight = 0.5

[[hypotheses]]
id = 1
code = "P1"
name = "Mild"
thresholds = { min = 60.0, max = 40.0 }
rules = [["G1"]]
"#;
    assert!(matches!(
        KnowledgeBase::from_toml(toml).unwrap_err(),
        KnowledgeError::InvalidThresholds { .. }
    ));
}

// ── Resolver ─────────────────────────────────────────────────────────────

#[test]
fn questions_take_first_declared_question_per_symptom() {
    let kb = KnowledgeBase::from_toml(&load_text("knowledge/shared_questions.toml")).unwrap();
    let prompts = questions_for(&kb, HypothesisId(1));

    // G2 has no question and is skipped.
    assert_eq!(prompts.len(), 1);
    assert_eq!(prompts[0].question_id, QuestionId(7));
    assert_eq!(prompts[0].symptom_code, code("G1"));
    assert_eq!(prompts[0].expert_weight, 0.8);
}

#[test]
fn questions_follow_symptom_code_order() {
    let kb = KnowledgeBase::builtin().unwrap();
    let prompts = questions_for(&kb, HypothesisId(1));
    let order: Vec<String> = prompts.iter().map(|p| p.symptom_code.to_string()).collect();
    assert_eq!(order, vec!["G1", "G3", "G5", "G10"]);
}

#[test]
fn required_symptoms_deduplicate_across_rules() {
    let kb = KnowledgeBase::from_toml(&load_text("knowledge/shared_questions.toml")).unwrap();
    let required = required_symptoms(&kb, HypothesisId(1));
    assert_eq!(required.len(), 2);
}

// ── Loading from config ──────────────────────────────────────────────────

#[test]
fn from_config_without_path_uses_builtin() {
    let kb = KnowledgeBase::from_config(&CertaConfig::default(), Path::new("/nonexistent")).unwrap();
    assert_eq!(kb.fingerprint(), KnowledgeBase::builtin().unwrap().fingerprint());
}

#[test]
fn from_config_resolves_relative_path_against_root() {
    let config = CertaConfig::from_toml("[knowledge]\npath = \"knowledge/single_rule.toml\"\n").unwrap();
    let kb = KnowledgeBase::from_config(&config, &fixtures_root()).unwrap();
    assert_eq!(kb.symptoms().len(), 2);
}

#[test]
fn load_reports_missing_file() {
    let dir = tempfile::TempDir::new().unwrap();
    let err = KnowledgeBase::load(&dir.path().join("missing.toml")).unwrap_err();
    assert!(matches!(err, KnowledgeError::FileNotFound { .. }));
}

#[test]
fn load_reads_file_from_disk() {
    let kb = KnowledgeBase::load(&fixture_path("knowledge/competing_rules.toml")).unwrap();
    assert_eq!(kb.hypotheses().len(), 2);
}

// ── Builder ──────────────────────────────────────────────────────────────

#[test]
fn builder_renumbers_rules_in_declaration_order() {
    use certa_core::models::{Hypothesis, Rule, Symptom};
    use certa_knowledge::KnowledgeBaseBuilder;

    let kb = KnowledgeBaseBuilder::new()
        .symptom(Symptom {
            id: SymptomId(1),
            code: code("G1"),
            description: "a".to_string(),
            expert_weight: 0.5,
        })
        .hypothesis(Hypothesis {
            id: HypothesisId(1),
            code: "P1".parse().unwrap(),
            name: "Mild".to_string(),
            description: String::new(),
            thresholds: None,
            dominant_symptoms: vec![],
            rules: vec![
                Rule { number: 9, symptoms: vec![code("G1")] },
                Rule { number: 9, symptoms: vec![code("G1")] },
            ],
        })
        .build()
        .unwrap();

    let numbers: Vec<usize> = kb.hypotheses()[0].rules.iter().map(|r| r.number).collect();
    assert_eq!(numbers, vec![1, 2]);
    assert!(!kb.hypotheses()[0].thresholds_contain(50.0));
}

#[test]
fn builder_rejects_unknown_dominant_symptom() {
    let toml = r#"
[[symptoms]]
id = 1
code = "G1"
description = "x"
expert_weight = 0.5

[[hypotheses]]
id = 1
code = "P1"
name = "Mild"
dominant_symptoms = ["G3"]
rules = [["G1"]]
"#;
    assert!(matches!(
        KnowledgeBase::from_toml(toml).unwrap_err(),
        KnowledgeError::UnknownDominantSymptom { .. }
    ));
}
