use std::path::PathBuf;

use diagnosis_ingest::IngestError;

/// Structural problems in a model bundle, found when it is loaded.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BundleError {
    #[error("scaler has {means} means but {scales} scales")]
    ScalerShape { means: usize, scales: usize },

    #[error("scaler mean for feature {index} is not finite")]
    NonFiniteMean { index: usize },

    #[error("scaler scale for feature {index} is {value}; expected a finite non-zero number")]
    InvalidScale { index: usize, value: f64 },

    #[error("scaler was fitted on {actual} features; the console expects {expected}")]
    FeatureCount { expected: usize, actual: usize },

    #[error("classifier expects {classifier} inputs but the scaler produces {scaler}")]
    InputWidth { classifier: usize, scaler: usize },

    #[error("network has no layers")]
    EmptyNetwork,

    #[error("layer {layer}: {message}")]
    Layer { layer: usize, message: String },

    #[error("output layer must have exactly one unit, found {0}")]
    OutputWidth(usize),

    #[error("classifier contains non-finite parameters")]
    NonFiniteParameter,
}

/// Fatal startup failures: nothing can be served without the artifacts.
#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    #[error(transparent)]
    Ingest(#[from] IngestError),

    #[error("invalid model bundle {path}: {source}")]
    InvalidBundle {
        path: PathBuf,
        #[source]
        source: BundleError,
    },
}

/// Failures while exporting the prediction history.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to encode history: {0}")]
    Csv(#[from] csv::Error),

    #[error("failed to encode history: {0}")]
    Buffer(#[from] std::io::Error),

    #[error("history export is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
