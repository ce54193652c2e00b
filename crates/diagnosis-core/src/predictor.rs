use tracing::debug;

use diagnosis_model::{Diagnosis, FeatureVector, Prediction, Result};

use crate::bundle::ModelBundle;

/// Scale-then-classify over a validated bundle.
#[derive(Debug, Clone, Copy)]
pub struct Predictor<'a> {
    bundle: &'a ModelBundle,
}

impl<'a> Predictor<'a> {
    pub fn new(bundle: &'a ModelBundle) -> Self {
        Self { bundle }
    }

    pub fn expected_features(&self) -> usize {
        self.bundle.n_features_in()
    }

    pub fn predict(&self, features: &FeatureVector) -> Result<Prediction> {
        self.predict_values(features.as_slice())
    }

    /// Predict from a raw slice; the length must match the scaler.
    pub fn predict_values(&self, values: &[f64]) -> Result<Prediction> {
        let scaled = self.bundle.scaler.transform(values)?;
        let classifier = &self.bundle.classifier;
        let diagnosis = Diagnosis::from_label(classifier.predict_label(&scaled))?;
        let malignant_probability = classifier.predict_proba(&scaled);
        debug!(%diagnosis, malignant_probability, "prediction");
        Ok(Prediction {
            diagnosis,
            malignant_probability,
        })
    }
}
