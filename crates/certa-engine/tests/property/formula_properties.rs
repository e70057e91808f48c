use certa_engine::classify;
use certa_engine::formula::{combine, combine_symptom_cf};
use proptest::prelude::*;

// ── Bounded output ───────────────────────────────────────────────────────

proptest! {
    #[test]
    fn combine_is_bounded(values in prop::collection::vec(-1.0f64..=1.0, 0..12)) {
        let result = combine(&values);
        prop_assert!((0.0..=1.0).contains(&result), "out of bounds: {}", result);
    }
}

// ── Non-negative pairs ───────────────────────────────────────────────────

proptest! {
    #[test]
    fn non_negative_pair_matches_closed_form(a in 0.0f64..=1.0, b in 0.0f64..=1.0) {
        let expected = a + b * (1.0 - a);
        prop_assert!((combine(&[a, b]) - expected).abs() < 1e-12);
    }
}

proptest! {
    #[test]
    fn non_negative_pair_is_commutative(a in 0.0f64..=1.0, b in 0.0f64..=1.0) {
        prop_assert!((combine(&[a, b]) - combine(&[b, a])).abs() < 1e-12);
    }
}

proptest! {
    #[test]
    fn adding_positive_evidence_never_lowers_confidence(
        values in prop::collection::vec(0.0f64..=1.0, 1..10),
        extra in 0.0f64..=1.0,
    ) {
        let before = combine(&values);
        let mut extended = values.clone();
        extended.push(extra);
        prop_assert!(combine(&extended) + 1e-12 >= before);
    }
}

// ── Singletons ───────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn singleton_is_clamped_value(x in -2.0f64..=2.0) {
        prop_assert_eq!(combine(&[x]), x.clamp(0.0, 1.0));
    }
}

#[test]
fn balanced_contradiction_is_zero() {
    assert_eq!(combine(&[0.5, -0.5]), 0.0);
}

// ── Symptom CF ───────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn symptom_cf_never_exceeds_either_input(w in 0.0f64..=1.0, u in 0.0f64..=1.0) {
        let cf = combine_symptom_cf(w, u).unwrap();
        prop_assert!(cf <= w && cf <= u);
    }
}

// ── Bands ────────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn every_percentage_has_a_band(p in 0.0f64..=100.0) {
        let band = classify(p);
        prop_assert!(!band.label.is_empty());
    }
}
