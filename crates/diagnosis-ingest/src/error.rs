use std::path::PathBuf;

use diagnosis_model::DiagnosisError;

/// Failures while reading artifacts from disk. All of them are fatal at
/// startup.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("failed to read file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse CSV {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("failed to parse JSON artifact {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to parse TOML manifest {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("{path}: row {row}, column {column}: '{value}' is not a number")]
    InvalidNumber {
        path: PathBuf,
        row: usize,
        column: usize,
        value: String,
    },

    #[error("{path}: row {row} has no label column")]
    MissingLabel { path: PathBuf, row: usize },

    #[error("{path}: row {row}: {source}")]
    Label {
        path: PathBuf,
        row: usize,
        #[source]
        source: DiagnosisError,
    },

    #[error(
        "held-out tables disagree: {features} has {feature_rows} rows but {labels} has {label_rows}"
    )]
    RowCountMismatch {
        features: PathBuf,
        feature_rows: usize,
        labels: PathBuf,
        label_rows: usize,
    },
}

impl IngestError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn csv(path: impl Into<PathBuf>, source: csv::Error) -> Self {
        Self::Csv {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, IngestError>;
