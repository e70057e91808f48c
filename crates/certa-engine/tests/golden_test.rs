//! Recorded end-to-end scenarios under `test-fixtures/golden/`.

use certa_engine::CertaintyEngine;
use certa_knowledge::KnowledgeBase;
use test_fixtures::{golden_scenarios, load_text, GoldenScenario};

const TOLERANCE: f64 = 1e-9;

fn engine_for(scenario: &GoldenScenario) -> CertaintyEngine {
    let kb = if scenario.knowledge == "builtin" {
        KnowledgeBase::builtin().unwrap()
    } else {
        KnowledgeBase::from_toml(&load_text(&scenario.knowledge)).unwrap()
    };
    CertaintyEngine::with_knowledge_base(kb)
}

#[test]
fn golden_scenarios_reproduce_recorded_verdicts() {
    let scenarios = golden_scenarios();
    assert!(scenarios.len() >= 8, "expected golden scenarios, found {}", scenarios.len());

    for (name, scenario) in &scenarios {
        let engine = engine_for(scenario);
        let verdict = engine
            .evaluate_hypothesis(scenario.hypothesis_id, &scenario.rating_set())
            .unwrap_or_else(|e| panic!("{name}: {e}"));
        let expected = &scenario.expected;

        assert!(
            (verdict.confidence - expected.confidence).abs() < TOLERANCE,
            "{name}: confidence {} != {}",
            verdict.confidence,
            expected.confidence
        );
        assert_eq!(verdict.band, expected.band, "{name}: band");
        assert_eq!(verdict.validated, expected.validated, "{name}: validated");

        let matched: Vec<usize> = verdict.matched_rules.iter().map(|r| r.rule_number).collect();
        assert_eq!(matched, expected.matched_rules, "{name}: matched rules");
    }
}
