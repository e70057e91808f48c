//! Diagnostic bands: map a confidence percentage to a severity level.
//!
//! | Percentage | Code | Label        |
//! |------------|------|--------------|
//! | ≥ 81       | P3   | Severe       |
//! | ≥ 61       | P2   | Moderate     |
//! | ≥ 40       | P1   | Mild         |
//! | < 40       | P0   | Not detected |

use certa_core::ids::BandCode;
use serde::Serialize;

/// One row of the band table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiagnosticBand {
    pub code: BandCode,
    /// Inclusive lower bound on the percentage.
    pub min_percentage: f64,
    pub label: &'static str,
    /// Typical daily play duration for this level.
    pub description: &'static str,
    pub recommendation: &'static str,
}

/// Evaluated top-down; the first row whose lower bound is met wins.
static BANDS: [DiagnosticBand; 4] = [
    DiagnosticBand {
        code: BandCode::P3,
        min_percentage: 81.0,
        label: "Severe",
        description: "More than 8 hours of play per day",
        recommendation: "Seek professional help: cognitive behavioural therapy, a supervised digital detox, \
                         and regular sessions with a psychologist.",
    },
    DiagnosticBand {
        code: BandCode::P2,
        min_percentage: 61.0,
        label: "Moderate",
        description: "4 to 8 hours of play per day",
        recommendation: "Consult a psychologist and keep a strict daily schedule with fixed play hours.",
    },
    DiagnosticBand {
        code: BandCode::P1,
        min_percentage: 40.0,
        label: "Mild",
        description: "2 to 4 hours of play per day",
        recommendation: "Keep play under 2 hours a day and take up physical hobbies or sport.",
    },
    DiagnosticBand {
        code: BandCode::P0,
        min_percentage: f64::NEG_INFINITY,
        label: "Not detected",
        description: "No sign of game addiction",
        recommendation: "Keep up healthy gaming habits and a balanced routine.",
    },
];

/// Classify a percentage. NaN falls through to P0.
pub fn classify(percentage: f64) -> &'static DiagnosticBand {
    BANDS
        .iter()
        .find(|band| percentage >= band.min_percentage)
        .unwrap_or(&BANDS[BANDS.len() - 1])
}

/// All bands, most severe first.
pub fn all_bands() -> &'static [DiagnosticBand] {
    &BANDS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_ordered_most_severe_first() {
        let mins: Vec<f64> = all_bands().iter().map(|b| b.min_percentage).collect();
        assert!(mins.windows(2).all(|w| w[0] > w[1]));
    }

    #[test]
    fn nan_is_not_detected() {
        assert_eq!(classify(f64::NAN).code, BandCode::P0);
    }
}
