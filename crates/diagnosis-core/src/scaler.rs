use serde::{Deserialize, Serialize};

use diagnosis_model::{DiagnosisError, Result};

use crate::error::BundleError;

/// Fitted per-feature standardisation: `z = (x - mean) / scale`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardScaler {
    pub mean: Vec<f64>,
    pub scale: Vec<f64>,
}

impl StandardScaler {
    /// Number of features the scaler was fitted on.
    pub fn n_features_in(&self) -> usize {
        self.mean.len()
    }

    pub fn validate(&self) -> std::result::Result<(), BundleError> {
        if self.mean.len() != self.scale.len() {
            return Err(BundleError::ScalerShape {
                means: self.mean.len(),
                scales: self.scale.len(),
            });
        }
        if let Some(index) = self.mean.iter().position(|value| !value.is_finite()) {
            return Err(BundleError::NonFiniteMean { index });
        }
        if let Some((index, value)) = self
            .scale
            .iter()
            .copied()
            .enumerate()
            .find(|(_, value)| !value.is_finite() || *value == 0.0)
        {
            return Err(BundleError::InvalidScale { index, value });
        }
        Ok(())
    }

    fn check_width(&self, values: &[f64]) -> Result<()> {
        if values.len() != self.n_features_in() {
            return Err(DiagnosisError::DimensionMismatch {
                expected: self.n_features_in(),
                actual: values.len(),
            });
        }
        Ok(())
    }

    pub fn transform(&self, values: &[f64]) -> Result<Vec<f64>> {
        self.check_width(values)?;
        Ok(values
            .iter()
            .zip(self.mean.iter().zip(&self.scale))
            .map(|(x, (mean, scale))| (x - mean) / scale)
            .collect())
    }

    pub fn inverse_transform(&self, values: &[f64]) -> Result<Vec<f64>> {
        self.check_width(values)?;
        Ok(values
            .iter()
            .zip(self.mean.iter().zip(&self.scale))
            .map(|(z, (mean, scale))| z * scale + mean)
            .collect())
    }
}
