use certa_core::confidence::{validate_signed, validate_unit, CertaintyFactor};
use certa_core::ids::SymptomCode;
use certa_core::models::{RatingMode, RatingSet};
use proptest::prelude::*;

// ── CertaintyFactor ──────────────────────────────────────────────────────

proptest! {
    #[test]
    fn certainty_factor_is_always_in_unit_interval(x in any::<f64>()) {
        let cf = CertaintyFactor::new(x).value();
        prop_assert!((0.0..=1.0).contains(&cf), "out of bounds: {}", cf);
    }
}

// ── Validation ───────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn unit_validation_accepts_exactly_the_unit_interval(x in -3.0f64..3.0) {
        prop_assert_eq!(validate_unit(x, "x").is_ok(), (0.0..=1.0).contains(&x));
    }
}

proptest! {
    #[test]
    fn signed_validation_accepts_exactly_the_signed_interval(x in -3.0f64..3.0) {
        prop_assert_eq!(validate_signed(x, "x").is_ok(), (-1.0..=1.0).contains(&x));
    }
}

// ── RatingSet ────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn rating_set_keeps_first_answer_position(numbers in prop::collection::vec(1u16..40, 0..30)) {
        let pairs = numbers.iter().map(|&n| (SymptomCode::new(n).unwrap(), 0.5));
        let set = RatingSet::from_pairs(pairs, RatingMode::Unit).unwrap();

        let mut expected: Vec<u16> = Vec::new();
        for &n in &numbers {
            if !expected.contains(&n) {
                expected.push(n);
            }
        }
        let codes: Vec<u16> = set.iter().map(|(code, _)| code.number()).collect();
        prop_assert_eq!(codes, expected);
    }
}

proptest! {
    #[test]
    fn endorsement_means_strictly_positive(x in -1.0f64..=1.0) {
        let code = SymptomCode::new(1).unwrap();
        let set = RatingSet::from_pairs([(code, x)], RatingMode::Signed).unwrap();
        prop_assert_eq!(set.endorses(code), x > 0.0);
    }
}
