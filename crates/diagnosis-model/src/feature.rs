//! Tumor measurement catalogue and the fixed-length feature vector.
//!
//! The catalogue order is the column order the scaler and classifier were
//! fitted with: all ten "mean" measurements, then the ten standard errors,
//! then the ten "worst" values.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{DiagnosisError, Result};

/// Number of measurements the model consumes.
pub const FEATURE_COUNT: usize = 30;

/// Cell nucleus measurement, before aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Measurement {
    Radius,
    Texture,
    Perimeter,
    Area,
    Smoothness,
    Compactness,
    Concavity,
    ConcavePoints,
    Symmetry,
    FractalDimension,
}

impl Measurement {
    pub const ALL: [Measurement; 10] = [
        Measurement::Radius,
        Measurement::Texture,
        Measurement::Perimeter,
        Measurement::Area,
        Measurement::Smoothness,
        Measurement::Compactness,
        Measurement::Concavity,
        Measurement::ConcavePoints,
        Measurement::Symmetry,
        Measurement::FractalDimension,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Measurement::Radius => "radius",
            Measurement::Texture => "texture",
            Measurement::Perimeter => "perimeter",
            Measurement::Area => "area",
            Measurement::Smoothness => "smoothness",
            Measurement::Compactness => "compactness",
            Measurement::Concavity => "concavity",
            Measurement::ConcavePoints => "concave_points",
            Measurement::Symmetry => "symmetry",
            Measurement::FractalDimension => "fractal_dimension",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Measurement::Radius => "Radius",
            Measurement::Texture => "Texture",
            Measurement::Perimeter => "Perimeter",
            Measurement::Area => "Area",
            Measurement::Smoothness => "Smoothness",
            Measurement::Compactness => "Compactness",
            Measurement::Concavity => "Concavity",
            Measurement::ConcavePoints => "Concave Points",
            Measurement::Symmetry => "Symmetry",
            Measurement::FractalDimension => "Fractal Dimension",
        }
    }
}

/// How a measurement was aggregated over the nuclei in an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FeatureGroup {
    Mean,
    StandardError,
    Worst,
}

impl FeatureGroup {
    pub const ALL: [FeatureGroup; 3] = [
        FeatureGroup::Mean,
        FeatureGroup::StandardError,
        FeatureGroup::Worst,
    ];

    pub fn key(self) -> &'static str {
        match self {
            FeatureGroup::Mean => "mean",
            FeatureGroup::StandardError => "se",
            FeatureGroup::Worst => "worst",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FeatureGroup::Mean => "Mean",
            FeatureGroup::StandardError => "SE",
            FeatureGroup::Worst => "Worst",
        }
    }
}

/// One named column of the feature vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Feature {
    pub measurement: Measurement,
    pub group: FeatureGroup,
}

impl Feature {
    pub fn new(measurement: Measurement, group: FeatureGroup) -> Self {
        Self { measurement, group }
    }

    /// Position of this feature in the model's input order.
    pub fn index(self) -> usize {
        self.group as usize * Measurement::ALL.len() + self.measurement as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        if index >= FEATURE_COUNT {
            return None;
        }
        let per_group = Measurement::ALL.len();
        Some(Self::new(
            Measurement::ALL[index % per_group],
            FeatureGroup::ALL[index / per_group],
        ))
    }

    /// Snake-case identifier, e.g. `concave_points_worst`.
    pub fn key(self) -> String {
        format!("{}_{}", self.measurement.key(), self.group.key())
    }

    /// Display label, e.g. `Concave Points Worst`.
    pub fn label(self) -> String {
        format!("{} {}", self.measurement.label(), self.group.label())
    }

    /// Look a feature up by key or label.
    ///
    /// Matching ignores case, and spaces or dashes count as underscores, so
    /// `radius_mean`, `Radius Mean` and `radius-mean` all resolve.
    pub fn parse(name: &str) -> Option<Self> {
        let wanted = normalize_name(name);
        features().find(|feature| feature.key() == wanted)
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// All features in model input order.
pub fn features() -> impl Iterator<Item = Feature> {
    (0..FEATURE_COUNT).filter_map(Feature::from_index)
}

fn normalize_name(raw: &str) -> String {
    raw.trim()
        .split(|ch: char| ch.is_whitespace() || ch == '-' || ch == '_')
        .filter(|part| !part.is_empty())
        .map(str::to_ascii_lowercase)
        .collect::<Vec<_>>()
        .join("_")
}

/// Exactly [`FEATURE_COUNT`] measurements in original (unscaled) units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureVector([f64; FEATURE_COUNT]);

impl Default for FeatureVector {
    fn default() -> Self {
        Self::zeros()
    }
}

impl FeatureVector {
    pub fn zeros() -> Self {
        Self([0.0; FEATURE_COUNT])
    }

    /// Copy a slice into a vector, refusing anything that is not exactly
    /// [`FEATURE_COUNT`] long.
    pub fn from_slice(values: &[f64]) -> Result<Self> {
        let array: [f64; FEATURE_COUNT] =
            values
                .try_into()
                .map_err(|_| DiagnosisError::DimensionMismatch {
                    expected: FEATURE_COUNT,
                    actual: values.len(),
                })?;
        Ok(Self(array))
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn get(&self, feature: Feature) -> f64 {
        self.0[feature.index()]
    }

    pub fn set(&mut self, feature: Feature, value: f64) {
        self.0[feature.index()] = value;
    }

    pub fn iter(&self) -> impl Iterator<Item = (Feature, f64)> + '_ {
        features().map(|feature| (feature, self.get(feature)))
    }
}

impl From<[f64; FEATURE_COUNT]> for FeatureVector {
    fn from(values: [f64; FEATURE_COUNT]) -> Self {
        Self(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalogue_order_is_mean_se_worst() {
        let keys: Vec<String> = features().map(Feature::key).collect();
        assert_eq!(keys.len(), FEATURE_COUNT);
        assert_eq!(keys[0], "radius_mean");
        assert_eq!(keys[9], "fractal_dimension_mean");
        assert_eq!(keys[10], "radius_se");
        assert_eq!(keys[17], "concave_points_se");
        assert_eq!(keys[20], "radius_worst");
        assert_eq!(keys[29], "fractal_dimension_worst");
    }

    #[test]
    fn index_round_trips() {
        for (index, feature) in features().enumerate() {
            assert_eq!(feature.index(), index);
            assert_eq!(Feature::from_index(index), Some(feature));
        }
        assert_eq!(Feature::from_index(FEATURE_COUNT), None);
    }

    #[test]
    fn parse_accepts_keys_and_labels() {
        let expected = Feature::new(Measurement::ConcavePoints, FeatureGroup::Worst);
        assert_eq!(Feature::parse("concave_points_worst"), Some(expected));
        assert_eq!(Feature::parse("Concave Points Worst"), Some(expected));
        assert_eq!(Feature::parse("  concave-points-WORST "), Some(expected));
        assert_eq!(
            Feature::parse("Fractal Dimension SE").map(Feature::index),
            Some(19)
        );
        assert_eq!(Feature::parse("radius"), None);
    }

    #[test]
    fn from_slice_rejects_wrong_length() {
        let err = FeatureVector::from_slice(&[1.0; 31]).unwrap_err();
        assert_eq!(
            err,
            DiagnosisError::DimensionMismatch {
                expected: 30,
                actual: 31
            }
        );
        assert!(FeatureVector::from_slice(&[]).is_err());
        assert!(FeatureVector::from_slice(&[0.5; FEATURE_COUNT]).is_ok());
    }

    #[test]
    fn set_and_get_by_feature() {
        let mut vector = FeatureVector::zeros();
        let area = Feature::parse("area_mean").unwrap();
        vector.set(area, 1001.0);
        assert_eq!(vector.get(area), 1001.0);
        assert_eq!(vector.as_slice()[3], 1001.0);
        assert_eq!(vector.iter().filter(|(_, v)| *v != 0.0).count(), 1);
    }
}
