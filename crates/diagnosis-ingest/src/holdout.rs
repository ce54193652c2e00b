//! Held-out feature and label tables.
//!
//! Both files are plain CSV with one header row. The feature table holds
//! rows already passed through the fitted scaler; the label table holds one
//! `0`/`1` column. Rows are matched by position.

use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::{debug, warn};

use diagnosis_model::Diagnosis;

use crate::error::{IngestError, Result};

/// Numeric table with its header row.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NumericTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<f64>>,
}

impl NumericTable {
    /// Column count declared by the header row.
    pub fn width(&self) -> usize {
        self.headers.len()
    }
}

/// Scaled held-out features paired with their true classes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HoldoutSet {
    features: NumericTable,
    labels: Vec<Diagnosis>,
}

impl HoldoutSet {
    /// Pair a feature table with labels. Callers that read from disk should
    /// go through [`load_holdout`], which checks the row counts.
    pub fn new(features: NumericTable, labels: Vec<Diagnosis>) -> Self {
        Self { features, labels }
    }

    pub fn len(&self) -> usize {
        self.features.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.rows.is_empty()
    }

    pub fn headers(&self) -> &[String] {
        &self.features.headers
    }

    pub fn width(&self) -> usize {
        self.features.width()
    }

    pub fn row(&self, index: usize) -> Option<&[f64]> {
        self.features.rows.get(index).map(Vec::as_slice)
    }

    pub fn label(&self, index: usize) -> Option<Diagnosis> {
        self.labels.get(index).copied()
    }
}

fn normalize_header(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

fn reader_for(path: &Path) -> Result<csv::Reader<std::fs::File>> {
    ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_path(path)
        .map_err(|source| IngestError::csv(path, source))
}

fn parse_cell(path: &Path, row: usize, column: usize, raw: &str) -> Result<f64> {
    let cell = raw.trim_matches('\u{feff}');
    cell.parse::<f64>()
        .map_err(|_| IngestError::InvalidNumber {
            path: path.to_path_buf(),
            row,
            column,
            value: cell.to_string(),
        })
}

fn parse_row(path: &Path, row: usize, record: &StringRecord) -> Result<Vec<f64>> {
    record
        .iter()
        .enumerate()
        .map(|(column, cell)| parse_cell(path, row, column, cell))
        .collect()
}

/// Read a fully numeric CSV table. Row numbers in errors are 1-based and
/// exclude the header.
pub fn read_numeric_table(path: &Path) -> Result<NumericTable> {
    let mut reader = reader_for(path)?;
    let headers = reader
        .headers()
        .map_err(|source| IngestError::csv(path, source))?
        .iter()
        .map(normalize_header)
        .collect();
    let mut rows = Vec::new();
    for (idx, record) in reader.records().enumerate() {
        let record = record.map_err(|source| IngestError::csv(path, source))?;
        rows.push(parse_row(path, idx + 1, &record)?);
    }
    debug!(path = %path.display(), rows = rows.len(), "read numeric table");
    Ok(NumericTable { headers, rows })
}

/// Read the first column of a label table as diagnoses.
pub fn read_label_column(path: &Path) -> Result<Vec<Diagnosis>> {
    let mut reader = reader_for(path)?;
    let mut labels = Vec::new();
    for (idx, record) in reader.records().enumerate() {
        let row = idx + 1;
        let record = record.map_err(|source| IngestError::csv(path, source))?;
        let Some(cell) = record.get(0).filter(|cell| !cell.is_empty()) else {
            return Err(IngestError::MissingLabel {
                path: path.to_path_buf(),
                row,
            });
        };
        let value = parse_cell(path, row, 0, cell)?;
        let label = Diagnosis::from_raw(value).map_err(|source| IngestError::Label {
            path: path.to_path_buf(),
            row,
            source,
        })?;
        labels.push(label);
    }
    Ok(labels)
}

/// Load the held-out feature and label tables and check that they line up.
pub fn load_holdout(features_path: &Path, labels_path: &Path) -> Result<HoldoutSet> {
    let features = read_numeric_table(features_path)?;
    let labels = read_label_column(labels_path)?;
    if features.rows.len() != labels.len() {
        return Err(IngestError::RowCountMismatch {
            features: features_path.to_path_buf(),
            feature_rows: features.rows.len(),
            labels: labels_path.to_path_buf(),
            label_rows: labels.len(),
        });
    }
    if features.rows.is_empty() {
        warn!(path = %features_path.display(), "held-out table has no rows");
    }
    Ok(HoldoutSet::new(features, labels))
}
