//! Artifact directory layout.
//!
//! An artifact directory may carry an `artifacts.toml` naming its files.
//! Every key is optional; anything left out falls back to the file names the
//! training notebook writes. Relative paths resolve against the directory.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::charts::{ChartSpec, default_charts};
use crate::error::{IngestError, Result};

pub const MANIFEST_FILE: &str = "artifacts.toml";
pub const DEFAULT_ARTIFACT_DIR: &str = "outputs";
pub const DEFAULT_MODEL_FILE: &str = "ann_model.json";
pub const DEFAULT_FEATURES_FILE: &str = "X_test.csv";
pub const DEFAULT_LABELS_FILE: &str = "y_test.csv";

/// Contents of `artifacts.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ArtifactManifest {
    #[serde(default)]
    pub model: Option<PathBuf>,
    #[serde(default)]
    pub features: Option<PathBuf>,
    #[serde(default)]
    pub labels: Option<PathBuf>,
    #[serde(default)]
    pub charts: Vec<ChartSpec>,
}

/// Resolved locations of every artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPaths {
    pub root: PathBuf,
    pub model: PathBuf,
    pub features: PathBuf,
    pub labels: PathBuf,
    pub charts: Vec<ChartSpec>,
}

impl ArtifactManifest {
    pub fn parse(path: &Path, contents: &str) -> Result<Self> {
        toml::from_str(contents).map_err(|source| IngestError::Toml {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn resolve(self, root: &Path) -> ArtifactPaths {
        let pick = |value: Option<PathBuf>, default: &str| {
            root.join(value.unwrap_or_else(|| PathBuf::from(default)))
        };
        let charts = if self.charts.is_empty() {
            default_charts()
        } else {
            self.charts
        };
        ArtifactPaths {
            root: root.to_path_buf(),
            model: pick(self.model, DEFAULT_MODEL_FILE),
            features: pick(self.features, DEFAULT_FEATURES_FILE),
            labels: pick(self.labels, DEFAULT_LABELS_FILE),
            charts,
        }
    }
}

/// Read `artifacts.toml` from `root` if present and resolve all paths.
pub fn load_manifest(root: &Path) -> Result<ArtifactPaths> {
    let path = root.join(MANIFEST_FILE);
    let manifest = if path.is_file() {
        let contents = std::fs::read_to_string(&path).map_err(|e| IngestError::io(&path, e))?;
        debug!(path = %path.display(), "using artifact manifest");
        ArtifactManifest::parse(&path, &contents)?
    } else {
        ArtifactManifest::default()
    };
    Ok(manifest.resolve(root))
}
