use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::confidence::{validate_signed, validate_unit};
use crate::errors::EvaluationError;
use crate::ids::SymptomCode;

/// Accepted domain for user confidence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RatingMode {
    /// Confidence in [0, 1].
    #[default]
    Unit,
    /// Confidence in [-1, 1]; negative values are evidence against.
    Signed,
}

impl RatingMode {
    /// Validate a user confidence for this mode.
    pub fn validate(self, value: f64, field: &str) -> Result<f64, EvaluationError> {
        match self {
            Self::Unit => validate_unit(value, field),
            Self::Signed => validate_signed(value, field),
        }
    }
}

impl fmt::Display for RatingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unit => f.write_str("unit"),
            Self::Signed => f.write_str("signed"),
        }
    }
}

impl FromStr for RatingMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "unit" => Ok(Self::Unit),
            "signed" => Ok(Self::Signed),
            other => Err(format!("unknown rating mode {other:?}, expected unit or signed")),
        }
    }
}

/// The six-step verbal answer scale shown to users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RatingScale {
    VerySure,
    Sure,
    FairlySure,
    Sometimes,
    Rarely,
    Never,
}

impl RatingScale {
    pub const ALL: [Self; 6] = [
        Self::VerySure,
        Self::Sure,
        Self::FairlySure,
        Self::Sometimes,
        Self::Rarely,
        Self::Never,
    ];

    /// User confidence carried by the answer.
    pub fn confidence(self) -> f64 {
        match self {
            Self::VerySure => 1.0,
            Self::Sure => 0.8,
            Self::FairlySure => 0.6,
            Self::Sometimes => 0.4,
            Self::Rarely => 0.2,
            Self::Never => 0.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::VerySure => "Very sure",
            Self::Sure => "Sure",
            Self::FairlySure => "Fairly sure",
            Self::Sometimes => "Sometimes",
            Self::Rarely => "Rarely",
            Self::Never => "Never",
        }
    }
}

impl FromStr for RatingScale {
    type Err = EvaluationError;

    /// Parses the label, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|answer| answer.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| EvaluationError::UnknownScaleAnswer {
                text: s.to_string(),
            })
    }
}

impl fmt::Display for RatingScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Validated user ratings keyed by symptom code, in answer order.
///
/// Iteration follows the order in which codes were first rated, so a fold
/// over the set is the caller's left-to-right fold. Re-rating a code keeps
/// its position and replaces the value.
///
/// Serialized as a JSON/TOML map in answer order. Deserialized values are
/// checked against the signed domain [-1, 1]; the engine re-checks them
/// against its configured [`RatingMode`] before combining.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RatingSet {
    entries: Vec<(SymptomCode, f64)>,
    index: HashMap<SymptomCode, usize>,
}

impl RatingSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from ordered (code, confidence) pairs. A later rating for the
    /// same code replaces an earlier one.
    pub fn from_pairs<I>(pairs: I, mode: RatingMode) -> Result<Self, EvaluationError>
    where
        I: IntoIterator<Item = (SymptomCode, f64)>,
    {
        let mut set = Self::new();
        for (code, confidence) in pairs {
            set.insert(code, confidence, mode)?;
        }
        Ok(set)
    }

    /// Insert a rating after validating it against `mode`.
    pub fn insert(
        &mut self,
        code: SymptomCode,
        confidence: f64,
        mode: RatingMode,
    ) -> Result<(), EvaluationError> {
        let confidence = mode.validate(confidence, &rating_field(code))?;
        self.put(code, confidence);
        Ok(())
    }

    /// Insert a verbal answer.
    pub fn insert_answer(&mut self, code: SymptomCode, answer: RatingScale) {
        self.put(code, answer.confidence());
    }

    fn put(&mut self, code: SymptomCode, confidence: f64) {
        match self.index.get(&code) {
            Some(&i) => self.entries[i].1 = confidence,
            None => {
                self.index.insert(code, self.entries.len());
                self.entries.push((code, confidence));
            }
        }
    }

    /// Check every rating against `mode`. Fails on the first out-of-domain
    /// value, in answer order.
    pub fn validate(&self, mode: RatingMode) -> Result<(), EvaluationError> {
        for &(code, confidence) in &self.entries {
            mode.validate(confidence, &rating_field(code))?;
        }
        Ok(())
    }

    pub fn get(&self, code: SymptomCode) -> Option<f64> {
        self.index.get(&code).map(|&i| self.entries[i].1)
    }

    /// A symptom is endorsed when its rating is strictly positive.
    pub fn endorses(&self, code: SymptomCode) -> bool {
        self.get(code).is_some_and(|value| value > 0.0)
    }

    /// Ratings in answer order.
    pub fn iter(&self) -> impl Iterator<Item = (SymptomCode, f64)> + '_ {
        self.entries.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn rating_field(code: SymptomCode) -> String {
    format!("rating[{code}]")
}

impl Serialize for RatingSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (code, confidence) in &self.entries {
            map.serialize_entry(code, confidence)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for RatingSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct RatingSetVisitor;

        impl<'de> Visitor<'de> for RatingSetVisitor {
            type Value = RatingSet;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of symptom codes to confidences in [-1, 1]")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<RatingSet, A::Error> {
                let mut set = RatingSet::new();
                while let Some((code, confidence)) = access.next_entry::<SymptomCode, f64>()? {
                    set.insert(code, confidence, RatingMode::Signed)
                        .map_err(de::Error::custom)?;
                }
                Ok(set)
            }
        }

        deserializer.deserialize_map(RatingSetVisitor)
    }
}
