//! Certainty-factor arithmetic.
//!
//! ```text
//! CF(symptom) = expertWeight × userConfidence
//!
//! combine(a, b) =
//!   a + b(1 − a)                    a ≥ 0, b ≥ 0
//!   a + b(1 + a)                    a < 0, b < 0
//!   (a + b) / (1 − min(|a|, |b|))   otherwise; (a + b) / 2 when the denominator is 0
//! ```
//!
//! Sequences are folded left to right with a running accumulator and the
//! result is clamped to [0, 1]: evidence against is never reported.

use certa_core::confidence::{validate_signed, validate_unit, CertaintyFactor};
use certa_core::constants::PERCENT_SCALE;
use certa_core::errors::EvaluationError;

/// Combined certainty of one symptom. Both inputs must lie in [0, 1].
pub fn combine_symptom_cf(expert_weight: f64, user_confidence: f64) -> Result<f64, EvaluationError> {
    let weight = validate_unit(expert_weight, "expert_weight")?;
    let confidence = validate_unit(user_confidence, "user_confidence")?;
    Ok(weight * confidence)
}

/// Combined certainty of one symptom when the user may report evidence
/// against it: confidence in [-1, 1], weight still in [0, 1].
pub fn combine_signed_symptom_cf(
    expert_weight: f64,
    user_confidence: f64,
) -> Result<f64, EvaluationError> {
    let weight = validate_unit(expert_weight, "expert_weight")?;
    let confidence = validate_signed(user_confidence, "user_confidence")?;
    Ok(weight * confidence)
}

/// One step of the fold. Unclamped.
pub fn combine_pair(acc: f64, next: f64) -> f64 {
    if acc >= 0.0 && next >= 0.0 {
        acc + next * (1.0 - acc)
    } else if acc < 0.0 && next < 0.0 {
        acc + next * (1.0 + acc)
    } else {
        let denominator = 1.0 - acc.abs().min(next.abs());
        if denominator == 0.0 {
            (acc + next) / 2.0
        } else {
            (acc + next) / denominator
        }
    }
}

/// Fold a sequence of certainty factors, in order, into one value in [0, 1].
///
/// Empty input yields 0.0; a single value is returned clamped.
pub fn combine(cf_values: &[f64]) -> f64 {
    let Some((&first, rest)) = cf_values.split_first() else {
        return 0.0;
    };
    let folded = rest.iter().fold(first, |acc, &next| combine_pair(acc, next));
    CertaintyFactor::new(folded).value()
}

/// Convert a certainty factor in [0, 1] to a percentage.
pub fn to_percentage(cf: f64) -> Result<f64, EvaluationError> {
    Ok(validate_unit(cf, "certainty_factor")? * PERCENT_SCALE)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn empty_combines_to_zero() {
        assert_eq!(combine(&[]), 0.0);
    }

    #[test]
    fn singleton_is_clamped() {
        assert_eq!(combine(&[0.35]), 0.35);
        assert_eq!(combine(&[-0.35]), 0.0);
        assert_eq!(combine(&[1.5]), 1.0);
    }

    #[test]
    fn two_positive_values_follow_the_textbook_formula() {
        assert!((combine(&[0.8, 0.6]) - 0.92).abs() < EPS);
    }

    #[test]
    fn negative_pair_uses_the_negative_branch() {
        // -0.4 + -0.5 * 0.6 = -0.7, reported as 0
        assert!((combine_pair(-0.4, -0.5) + 0.7).abs() < EPS);
        assert_eq!(combine(&[-0.4, -0.5]), 0.0);
    }

    #[test]
    fn mixed_signs_normalize_by_the_weaker_magnitude() {
        // (0.9 - 0.3) / (1 - 0.3)
        assert!((combine(&[0.9, -0.3]) - 0.6 / 0.7).abs() < EPS);
    }

    #[test]
    fn opposite_certainties_fall_back_to_midpoint() {
        assert_eq!(combine_pair(1.0, -1.0), 0.0);
        assert_eq!(combine(&[0.5, -0.5]), 0.0);
    }

    #[test]
    fn symptom_cf_is_product_of_validated_inputs() {
        assert!((combine_symptom_cf(0.8, 0.5).unwrap() - 0.4).abs() < EPS);
        assert!(combine_symptom_cf(1.2, 0.5).is_err());
        assert!(combine_symptom_cf(0.8, -0.5).is_err());
        assert!((combine_signed_symptom_cf(0.8, -0.5).unwrap() + 0.4).abs() < EPS);
    }

    #[test]
    fn percentage_requires_unit_interval() {
        assert!((to_percentage(0.92).unwrap() - 92.0).abs() < 1e-9);
        assert!(to_percentage(1.01).is_err());
    }
}
