pub mod diagnosis;
pub mod error;
pub mod feature;
pub mod history;

pub use diagnosis::{Diagnosis, GroundTruth, Prediction, SampleRef};
pub use error::{DiagnosisError, Result};
pub use feature::{
    FEATURE_COUNT, Feature, FeatureGroup, FeatureVector, Measurement, features,
};
pub use history::{HISTORY_TIME_FORMAT, HistoryEntry};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn history_entry_serializes() {
        let entry = HistoryEntry {
            recorded_at: chrono::NaiveDate::from_ymd_opt(2024, 3, 1)
                .and_then(|date| date.and_hms_opt(14, 5, 9))
                .expect("valid timestamp"),
            predicted: Diagnosis::Malignant,
            ground_truth: GroundTruth::Known(Diagnosis::Benign),
            sample: Some(SampleRef(4)),
        };
        let json = serde_json::to_string(&entry).expect("serialize entry");
        let round: HistoryEntry = serde_json::from_str(&json).expect("deserialize entry");
        assert_eq!(round, entry);
        assert_eq!(round.time_label(), "14:05:09");
        assert_eq!(round.is_correct(), Some(false));
    }
}
