//! Typed identifiers for knowledge-base entities.
//!
//! Codes such as `G5` or `P2` are parsed into validated newtypes at load
//! time, so a typo in a rule table fails loudly instead of resolving to an
//! empty symptom set.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::CodeError;

macro_rules! prefixed_code {
    ($(#[$meta:meta])* $name:ident, $prefix:literal, $min:literal, $kind:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(u16);

        impl $name {
            /// Smallest accepted number.
            pub const MIN: u16 = $min;

            /// Build a code from its number.
            #[allow(unused_comparisons)]
            pub fn new(number: u16) -> Result<Self, CodeError> {
                if number < Self::MIN {
                    return Err(CodeError::Malformed {
                        kind: $kind,
                        text: format!("{}{}", $prefix, number),
                        expected: concat!("number >= ", stringify!($min)),
                    });
                }
                Ok(Self(number))
            }

            /// The numeric part of the code.
            pub fn number(self) -> u16 {
                self.0
            }
        }

        impl FromStr for $name {
            type Err = CodeError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let malformed = |expected: &'static str| CodeError::Malformed {
                    kind: $kind,
                    text: s.to_string(),
                    expected,
                };
                let digits = s
                    .trim()
                    .strip_prefix($prefix)
                    .ok_or_else(|| malformed(concat!("prefix '", $prefix, "'")))?;
                if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(malformed("decimal digits after the prefix"));
                }
                let number: u16 = digits
                    .parse()
                    .map_err(|_| malformed("a number that fits in 16 bits"))?;
                Self::new(number).map_err(|_| malformed(concat!("number >= ", stringify!($min))))
            }
        }

        impl TryFrom<String> for $name {
            type Error = CodeError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                value.parse()
            }
        }

        impl From<$name> for String {
            fn from(code: $name) -> Self {
                code.to_string()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}{}", $prefix, self.0)
            }
        }
    };
}

prefixed_code!(
    /// Symptom code, `G<n>` with `n >= 1`. Orders numerically (`G2 < G10`).
    SymptomCode,
    'G',
    1,
    "symptom"
);

prefixed_code!(
    /// Hypothesis code, `P<n>` with `n >= 0`.
    HypothesisCode,
    'P',
    0,
    "hypothesis"
);

macro_rules! numeric_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub u32);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<u32> for $name {
            fn from(value: u32) -> Self {
                Self(value)
            }
        }
    };
}

numeric_id!(
    /// Storage identifier of a symptom.
    SymptomId
);
numeric_id!(
    /// Storage identifier of a hypothesis. Opaque key used by callers.
    HypothesisId
);
numeric_id!(
    /// Storage identifier of a question.
    QuestionId
);

/// Diagnostic band code. Ordered from "not detected" to "severe".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum BandCode {
    P0,
    P1,
    P2,
    P3,
}

impl BandCode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::P0 => "P0",
            Self::P1 => "P1",
            Self::P2 => "P2",
            Self::P3 => "P3",
        }
    }
}

impl fmt::Display for BandCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BandCode {
    type Err = CodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "P0" => Ok(Self::P0),
            "P1" => Ok(Self::P1),
            "P2" => Ok(Self::P2),
            "P3" => Ok(Self::P3),
            other => Err(CodeError::Malformed {
                kind: "band",
                text: other.to_string(),
                expected: "one of P0, P1, P2, P3",
            }),
        }
    }
}
