use thiserror::Error;

/// Errors raised by a single user action (draw, edit, predict).
///
/// None of these are fatal: the triggering action is aborted and the
/// session keeps its previous state.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DiagnosisError {
    #[error("dimension mismatch: model expects {expected} features, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("held-out set is empty")]
    EmptyHoldout,

    #[error("sample {index} is out of range (held-out set has {rows} rows)")]
    SampleOutOfRange { index: usize, rows: usize },

    #[error("invalid class label {0}: expected 0 or 1")]
    InvalidLabel(f64),

    #[error("unknown feature: {0}")]
    UnknownFeature(String),

    #[error("value for {feature} must be a finite number, got {value}")]
    NonFiniteValue { feature: String, value: f64 },
}

pub type Result<T> = std::result::Result<T, DiagnosisError>;
