use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use diagnosis_ingest::read_json_artifact;
use diagnosis_model::FEATURE_COUNT;

use crate::classifier::Classifier;
use crate::error::{ArtifactError, BundleError};
use crate::scaler::StandardScaler;

/// Fitted classifier together with the scaler it was trained behind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelBundle {
    pub scaler: StandardScaler,
    pub classifier: Classifier,
}

impl ModelBundle {
    /// Read a bundle from JSON and check that its parts fit together.
    pub fn load(path: &Path) -> Result<Self, ArtifactError> {
        let bundle: ModelBundle = read_json_artifact(path)?;
        bundle
            .validate()
            .map_err(|source| ArtifactError::InvalidBundle {
                path: path.to_path_buf(),
                source,
            })?;
        info!(
            path = %path.display(),
            model = bundle.classifier.model_name(),
            features = bundle.scaler.n_features_in(),
            "loaded model bundle"
        );
        Ok(bundle)
    }

    pub fn validate(&self) -> Result<(), BundleError> {
        self.scaler.validate()?;
        if self.scaler.n_features_in() != FEATURE_COUNT {
            return Err(BundleError::FeatureCount {
                expected: FEATURE_COUNT,
                actual: self.scaler.n_features_in(),
            });
        }
        self.classifier.validate()?;
        if self.classifier.n_features_in() != self.scaler.n_features_in() {
            return Err(BundleError::InputWidth {
                classifier: self.classifier.n_features_in(),
                scaler: self.scaler.n_features_in(),
            });
        }
        Ok(())
    }

    pub fn n_features_in(&self) -> usize {
        self.scaler.n_features_in()
    }
}
