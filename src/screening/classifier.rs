//! Boundary types for the external face-attribute classifier.
//!
//! The classifier runs outside this crate during feature extraction. Its
//! failure modes never reach the rule engine: [`ClassifierOutputs::resolve`]
//! degrades a failed scan, or any single missing attribute, to the `Unknown`
//! sentinel, and every rule reading a classifier field treats `Unknown` as
//! "does not match".

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::warn;

const UNKNOWN: &str = "Unknown";

/// Categorical attribute (emotion, ethnicity) that may be unavailable.
///
/// Serializes as the bare label, or the string `"Unknown"`, matching the
/// report format the surrounding UI layers already consume.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AttributeLabel {
    Tagged(String),
    #[default]
    Unknown,
}

impl AttributeLabel {
    pub fn as_str(&self) -> &str {
        match self {
            AttributeLabel::Tagged(label) => label,
            AttributeLabel::Unknown => UNKNOWN,
        }
    }
}

impl Serialize for AttributeLabel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for AttributeLabel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        if raw == UNKNOWN {
            Ok(AttributeLabel::Unknown)
        } else {
            Ok(AttributeLabel::Tagged(raw))
        }
    }
}

/// Estimated age in years, or `Unknown` when the classifier could not tell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AgeEstimate {
    Years(u8),
    #[default]
    Unknown,
}

impl std::fmt::Display for AgeEstimate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AgeEstimate::Years(years) => write!(f, "{years}"),
            AgeEstimate::Unknown => f.write_str(UNKNOWN),
        }
    }
}

impl Serialize for AgeEstimate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            AgeEstimate::Years(years) => serializer.serialize_u8(*years),
            AgeEstimate::Unknown => serializer.serialize_str(UNKNOWN),
        }
    }
}

impl<'de> Deserialize<'de> for AgeEstimate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Years(u8),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Years(years) => Ok(AgeEstimate::Years(years)),
            Raw::Text(text) if text == UNKNOWN => Ok(AgeEstimate::Unknown),
            Raw::Text(text) => Err(DeError::custom(format!(
                "age must be a number of years or '{UNKNOWN}', got '{text}'"
            ))),
        }
    }
}

/// Resolved classifier attributes carried inside a feature record.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ClassifierOutputs {
    #[serde(default)]
    pub emotion: AttributeLabel,
    #[serde(default)]
    pub ethnicity: AttributeLabel,
    #[serde(default)]
    pub age: AgeEstimate,
}

impl ClassifierOutputs {
    /// All three attributes unavailable, e.g. when the backend never ran.
    pub fn unknown() -> Self {
        Self::default()
    }

    /// Degrade a raw classifier outcome field by field. A failed scan, or any
    /// attribute the backend omitted, resolves to `Unknown` without aborting
    /// feature extraction.
    pub fn resolve(scan: Result<AttributeScan, ClassifierError>) -> Self {
        match scan {
            Ok(scan) => Self {
                emotion: scan
                    .dominant_emotion
                    .map(AttributeLabel::Tagged)
                    .unwrap_or_default(),
                ethnicity: scan
                    .dominant_ethnicity
                    .map(AttributeLabel::Tagged)
                    .unwrap_or_default(),
                age: scan.age.map(AgeEstimate::Years).unwrap_or_default(),
            },
            Err(err) => {
                warn!(error = %err, "attribute classifier unavailable, degrading to Unknown");
                Self::unknown()
            }
        }
    }
}

/// Raw per-frame output of the attribute backend before degradation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AttributeScan {
    pub dominant_emotion: Option<String>,
    pub dominant_ethnicity: Option<String>,
    pub age: Option<u8>,
}

/// Tagged failure raised by the attribute backend.
#[derive(Debug, thiserror::Error)]
pub enum ClassifierError {
    #[error("no face detected in frame")]
    FaceNotDetected,
    #[error("attribute backend unavailable: {0}")]
    Unavailable(String),
}
