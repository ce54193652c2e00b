//! CSV export of the prediction history.

use std::path::Path;

use csv::WriterBuilder;

use diagnosis_model::HistoryEntry;

use crate::error::ExportError;

pub const HISTORY_HEADERS: [&str; 3] = ["Time", "Predicted", "Ground Truth"];
pub const DEFAULT_EXPORT_FILE: &str = "prediction_history.csv";

/// Encode the history as CSV text, header row first.
pub fn history_csv(entries: &[HistoryEntry]) -> Result<String, ExportError> {
    let mut writer = WriterBuilder::new().from_writer(Vec::new());
    writer.write_record(HISTORY_HEADERS)?;
    for entry in entries {
        writer.write_record([
            entry.time_label().as_str(),
            entry.predicted.as_str(),
            entry.ground_truth.as_str(),
        ])?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|error| ExportError::Buffer(error.into_error()))?;
    Ok(String::from_utf8(bytes)?)
}

pub fn write_history_csv(path: &Path, entries: &[HistoryEntry]) -> Result<(), ExportError> {
    let payload = history_csv(entries)?;
    std::fs::write(path, payload).map_err(|source| ExportError::Write {
        path: path.to_path_buf(),
        source,
    })
}
