use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::diagnosis::{Diagnosis, GroundTruth, SampleRef};

/// Format used for the time column of the history table and its export.
pub const HISTORY_TIME_FORMAT: &str = "%H:%M:%S";

/// One recorded prediction. Entries are never modified after recording.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub recorded_at: NaiveDateTime,
    pub predicted: Diagnosis,
    pub ground_truth: GroundTruth,
    /// Held-out row the form came from, if any.
    pub sample: Option<SampleRef>,
}

impl HistoryEntry {
    pub fn time_label(&self) -> String {
        self.recorded_at.format(HISTORY_TIME_FORMAT).to_string()
    }

    /// Whether the prediction matched a known ground truth.
    pub fn is_correct(&self) -> Option<bool> {
        self.ground_truth
            .diagnosis()
            .map(|truth| truth == self.predicted)
    }
}
