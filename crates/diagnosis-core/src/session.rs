//! Per-session form state and prediction history.
//!
//! A session is owned by exactly one user loop and is never shared. Every
//! operation either completes or leaves the session untouched.

use chrono::NaiveDateTime;
use rand::Rng;
use tracing::info;

use diagnosis_ingest::HoldoutSet;
use diagnosis_model::{
    DiagnosisError, Feature, FeatureVector, GroundTruth, HistoryEntry, Prediction, Result,
    SampleRef,
};

use crate::predictor::Predictor;
use crate::sample::{DrawnSample, SampleProvider};

/// Where the current form content came from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormState {
    /// Typed in by the user (or freshly reset).
    #[default]
    Manual,
    /// Unchanged copy of a held-out row, so its true class is known.
    Prefilled(SampleRef),
}

/// What a predict action produced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PredictionOutcome {
    pub prediction: Prediction,
    pub ground_truth: GroundTruth,
}

#[derive(Debug, Clone, Default)]
pub struct Session {
    form: FeatureVector,
    state: FormState,
    history: Vec<HistoryEntry>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn form(&self) -> &FeatureVector {
        &self.form
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    pub fn sample(&self) -> Option<SampleRef> {
        match self.state {
            FormState::Prefilled(sample) => Some(sample),
            FormState::Manual => None,
        }
    }

    pub fn is_test_sample(&self) -> bool {
        self.sample().is_some()
    }

    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Replace the form with a random held-out row.
    pub fn fill_from_sample<R: Rng>(
        &mut self,
        provider: &SampleProvider<'_>,
        rng: &mut R,
    ) -> Result<SampleRef> {
        let drawn = provider.draw(rng)?;
        Ok(self.apply_sample(drawn))
    }

    /// Replace the form with a specific held-out row.
    pub fn fill_from_row(
        &mut self,
        provider: &SampleProvider<'_>,
        index: usize,
    ) -> Result<SampleRef> {
        let drawn = provider.draw_at(index)?;
        Ok(self.apply_sample(drawn))
    }

    fn apply_sample(&mut self, drawn: DrawnSample) -> SampleRef {
        self.form = drawn.features;
        self.state = FormState::Prefilled(drawn.sample);
        info!(sample = drawn.sample.index(), "form filled from held-out sample");
        drawn.sample
    }

    /// Edit one field. A changed value detaches the form from its held-out row.
    pub fn set_feature(&mut self, feature: Feature, value: f64) -> Result<()> {
        if !value.is_finite() {
            return Err(DiagnosisError::NonFiniteValue {
                feature: feature.label(),
                value,
            });
        }
        if self.form.get(feature) == value {
            return Ok(());
        }
        self.form.set(feature, value);
        self.state = FormState::Manual;
        Ok(())
    }

    /// Replace the whole form with manually entered values.
    pub fn set_form(&mut self, form: FeatureVector) -> Result<()> {
        if let Some((feature, value)) = form.iter().find(|(_, value)| !value.is_finite()) {
            return Err(DiagnosisError::NonFiniteValue {
                feature: feature.label(),
                value,
            });
        }
        self.form = form;
        self.state = FormState::Manual;
        Ok(())
    }

    /// Clear the form back to zeros. History is kept.
    pub fn reset(&mut self) {
        self.form = FeatureVector::zeros();
        self.state = FormState::Manual;
    }

    pub fn record(&mut self, entry: HistoryEntry) {
        self.history.push(entry);
    }

    /// True class of the current form, known only for an unedited sample.
    pub fn ground_truth(&self, holdout: &HoldoutSet) -> GroundTruth {
        self.sample()
            .and_then(|sample| holdout.label(sample.index()))
            .map_or(GroundTruth::Unknown, GroundTruth::Known)
    }

    /// Run inference on the form and append the result to the history.
    pub fn predict(
        &mut self,
        predictor: &Predictor<'_>,
        holdout: &HoldoutSet,
        at: NaiveDateTime,
    ) -> Result<PredictionOutcome> {
        let prediction = predictor.predict(&self.form)?;
        let ground_truth = self.ground_truth(holdout);
        self.record(HistoryEntry {
            recorded_at: at,
            predicted: prediction.diagnosis,
            ground_truth,
            sample: self.sample(),
        });
        info!(
            predicted = %prediction.diagnosis,
            ground_truth = %ground_truth,
            "prediction recorded"
        );
        Ok(PredictionOutcome {
            prediction,
            ground_truth,
        })
    }
}
