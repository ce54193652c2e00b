//! Pre-rendered performance charts.
//!
//! Charts are shown as-is. A chart that is missing or cannot be decoded
//! becomes a placeholder entry; it never aborts startup.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::warn;

/// A chart file as declared in the manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub file: PathBuf,
    pub caption: String,
}

impl ChartSpec {
    pub fn new(file: impl Into<PathBuf>, caption: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            caption: caption.into(),
        }
    }
}

/// The gallery shown when the manifest does not list any charts.
pub fn default_charts() -> Vec<ChartSpec> {
    vec![
        ChartSpec::new("figure_loss.png", "Training Loss"),
        ChartSpec::new("figure_train_test_accuracy.png", "Train vs Test Accuracy"),
        ChartSpec::new("figure_accuracy_learning_curve.png", "Learning Curve"),
        ChartSpec::new("ann_confusion_matrix.png", "Confusion Matrix"),
        ChartSpec::new(
            "model_comparison_all_models.png",
            "Model Comparison (Accuracy)",
        ),
    ]
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChartStatus {
    Available { width: u32, height: u32 },
    Missing { reason: String },
}

/// A chart after checking the file on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartEntry {
    pub caption: String,
    pub path: PathBuf,
    pub status: ChartStatus,
}

impl ChartEntry {
    pub fn is_available(&self) -> bool {
        matches!(self.status, ChartStatus::Available { .. })
    }
}

/// Check one chart by reading its image header.
pub fn probe_chart(path: &Path, caption: &str) -> ChartEntry {
    let status = match image::image_dimensions(path) {
        Ok((width, height)) => ChartStatus::Available { width, height },
        Err(error) => {
            warn!(path = %path.display(), %error, "chart unavailable");
            ChartStatus::Missing {
                reason: error.to_string(),
            }
        }
    };
    ChartEntry {
        caption: caption.to_string(),
        path: path.to_path_buf(),
        status,
    }
}

/// Check every chart, resolving relative files against `root`.
pub fn probe_charts(root: &Path, specs: &[ChartSpec]) -> Vec<ChartEntry> {
    specs
        .iter()
        .map(|spec| probe_chart(&root.join(&spec.file), &spec.caption))
        .collect()
}
