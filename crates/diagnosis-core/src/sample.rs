//! Demo inputs drawn from the held-out set.

use rand::Rng;
use tracing::debug;

use diagnosis_ingest::HoldoutSet;
use diagnosis_model::{DiagnosisError, FeatureVector, Result, SampleRef};

use crate::scaler::StandardScaler;

/// A held-out row converted back to original units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawnSample {
    pub features: FeatureVector,
    pub sample: SampleRef,
}

#[derive(Debug, Clone, Copy)]
pub struct SampleProvider<'a> {
    scaler: &'a StandardScaler,
    holdout: &'a HoldoutSet,
}

impl<'a> SampleProvider<'a> {
    pub fn new(scaler: &'a StandardScaler, holdout: &'a HoldoutSet) -> Self {
        Self { scaler, holdout }
    }

    pub fn rows(&self) -> usize {
        self.holdout.len()
    }

    /// Pick a uniformly random row and unscale it.
    pub fn draw<R: Rng>(&self, rng: &mut R) -> Result<DrawnSample> {
        if self.holdout.is_empty() {
            return Err(DiagnosisError::EmptyHoldout);
        }
        let index = rng.random_range(0..self.holdout.len());
        self.draw_at(index)
    }

    /// Unscale a specific row.
    pub fn draw_at(&self, index: usize) -> Result<DrawnSample> {
        let row = self
            .holdout
            .row(index)
            .ok_or(DiagnosisError::SampleOutOfRange {
                index,
                rows: self.holdout.len(),
            })?;
        let expected = self.scaler.n_features_in();
        if row.len() != expected {
            return Err(DiagnosisError::DimensionMismatch {
                expected,
                actual: row.len(),
            });
        }
        let original = self.scaler.inverse_transform(row)?;
        let features = FeatureVector::from_slice(&original)?;
        debug!(row = index, "drew held-out sample");
        Ok(DrawnSample {
            features,
            sample: SampleRef(index),
        })
    }
}
