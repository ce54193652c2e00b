use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{DiagnosisError, Result};

/// Classifier output class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Diagnosis {
    Benign,
    Malignant,
}

impl Diagnosis {
    /// Map a raw model label: 0 is benign, 1 is malignant.
    pub fn from_label(label: u8) -> Result<Self> {
        match label {
            0 => Ok(Diagnosis::Benign),
            1 => Ok(Diagnosis::Malignant),
            other => Err(DiagnosisError::InvalidLabel(f64::from(other))),
        }
    }

    /// Map a label read from a table, where `1` and `1.0` are equivalent.
    pub fn from_raw(value: f64) -> Result<Self> {
        if value == 0.0 {
            Ok(Diagnosis::Benign)
        } else if value == 1.0 {
            Ok(Diagnosis::Malignant)
        } else {
            Err(DiagnosisError::InvalidLabel(value))
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Diagnosis::Benign => "Benign",
            Diagnosis::Malignant => "Malignant",
        }
    }
}

impl fmt::Display for Diagnosis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// True class of the current form, when it is known.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GroundTruth {
    Known(Diagnosis),
    Unknown,
}

impl GroundTruth {
    pub const UNKNOWN_LABEL: &'static str = "Unknown (manual entry)";

    pub fn as_str(self) -> &'static str {
        match self {
            GroundTruth::Known(diagnosis) => diagnosis.as_str(),
            GroundTruth::Unknown => Self::UNKNOWN_LABEL,
        }
    }

    pub fn diagnosis(self) -> Option<Diagnosis> {
        match self {
            GroundTruth::Known(diagnosis) => Some(diagnosis),
            GroundTruth::Unknown => None,
        }
    }

    pub fn is_known(self) -> bool {
        matches!(self, GroundTruth::Known(_))
    }
}

impl fmt::Display for GroundTruth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Row index into the held-out feature and label tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SampleRef(pub usize);

impl SampleRef {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for SampleRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Result of one inference call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub diagnosis: Diagnosis,
    /// Model probability of the malignant class, in `[0, 1]`.
    pub malignant_probability: f64,
}

impl Prediction {
    /// Probability the model assigns to its own decision.
    pub fn confidence(&self) -> f64 {
        match self.diagnosis {
            Diagnosis::Malignant => self.malignant_probability,
            Diagnosis::Benign => 1.0 - self.malignant_probability,
        }
    }
}
