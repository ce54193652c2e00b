//! Artifact store I/O for the diagnosis console.
//!
//! Everything here runs once at startup. The results are treated as
//! read-only for the rest of the process.

pub mod charts;
pub mod error;
pub mod holdout;
pub mod json;
pub mod manifest;

pub use charts::{ChartEntry, ChartSpec, ChartStatus, default_charts, probe_chart, probe_charts};
pub use error::{IngestError, Result};
pub use holdout::{HoldoutSet, NumericTable, load_holdout, read_label_column, read_numeric_table};
pub use json::read_json_artifact;
pub use manifest::{
    ArtifactManifest, ArtifactPaths, DEFAULT_ARTIFACT_DIR, DEFAULT_FEATURES_FILE,
    DEFAULT_LABELS_FILE, DEFAULT_MODEL_FILE, MANIFEST_FILE, load_manifest,
};
