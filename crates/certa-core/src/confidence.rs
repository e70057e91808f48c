use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::PERCENT_SCALE;
use crate::errors::EvaluationError;

/// Certainty factor clamped to [0.0, 1.0].
/// The reported degree of "evidence for" a symptom or hypothesis.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct CertaintyFactor(f64);

impl CertaintyFactor {
    pub const ZERO: Self = Self(0.0);

    /// Create a new CertaintyFactor, clamping to [0.0, 1.0]. NaN maps to 0.0.
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self::ZERO;
        }
        Self(value.clamp(0.0, 1.0))
    }

    /// Get the raw f64 value.
    pub fn value(self) -> f64 {
        self.0
    }

    /// The factor expressed as a percentage in [0, 100].
    pub fn percentage(self) -> f64 {
        self.0 * PERCENT_SCALE
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0.0
    }
}

impl Default for CertaintyFactor {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for CertaintyFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}", self.0)
    }
}

impl From<f64> for CertaintyFactor {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<CertaintyFactor> for f64 {
    fn from(cf: CertaintyFactor) -> Self {
        cf.0
    }
}

/// Validate a value in [0.0, 1.0]. NaN is rejected.
pub fn validate_unit(value: f64, field: &str) -> Result<f64, EvaluationError> {
    validate_range(value, field, 0.0, 1.0)
}

/// Validate a value in [-1.0, 1.0]. NaN is rejected.
pub fn validate_signed(value: f64, field: &str) -> Result<f64, EvaluationError> {
    validate_range(value, field, -1.0, 1.0)
}

fn validate_range(value: f64, field: &str, min: f64, max: f64) -> Result<f64, EvaluationError> {
    if (min..=max).contains(&value) {
        Ok(value)
    } else {
        Err(EvaluationError::invalid_input(field, value, min, max))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_clamps_into_unit_interval() {
        assert_eq!(CertaintyFactor::new(1.7).value(), 1.0);
        assert_eq!(CertaintyFactor::new(-0.4).value(), 0.0);
        assert_eq!(CertaintyFactor::new(f64::NAN).value(), 0.0);
    }

    #[test]
    fn validate_unit_rejects_nan_and_out_of_range() {
        assert!(validate_unit(f64::NAN, "x").is_err());
        assert!(validate_unit(1.01, "x").is_err());
        assert!(validate_unit(-0.01, "x").is_err());
        assert_eq!(validate_unit(0.0, "x").unwrap(), 0.0);
        assert_eq!(validate_unit(1.0, "x").unwrap(), 1.0);
    }

    #[test]
    fn validate_signed_accepts_negative_evidence() {
        assert_eq!(validate_signed(-1.0, "x").unwrap(), -1.0);
        assert!(validate_signed(-1.5, "x").is_err());
    }
}
