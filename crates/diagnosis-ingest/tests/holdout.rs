use std::fs;
use std::path::PathBuf;

use diagnosis_ingest::{IngestError, load_holdout, load_manifest, read_numeric_table};
use diagnosis_model::Diagnosis;
use tempfile::TempDir;

fn write(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("write file");
    path
}

#[test]
fn reads_features_and_labels() {
    let dir = TempDir::new().expect("temp dir");
    let features = write(&dir, "X_test.csv", "a,b,c\n0.5,-1.25,2\n1,0,-0.5\n");
    let labels = write(&dir, "y_test.csv", "target\n1\n0.0\n");

    let set = load_holdout(&features, &labels).expect("load holdout");

    assert_eq!(set.len(), 2);
    assert_eq!(set.headers(), ["a", "b", "c"]);
    assert_eq!(set.row(0), Some(&[0.5, -1.25, 2.0][..]));
    assert_eq!(set.label(0), Some(Diagnosis::Malignant));
    assert_eq!(set.label(1), Some(Diagnosis::Benign));
}

#[test]
fn row_count_mismatch_is_fatal() {
    let dir = TempDir::new().expect("temp dir");
    let features = write(&dir, "X_test.csv", "a,b\n1,2\n3,4\n");
    let labels = write(&dir, "y_test.csv", "target\n1\n");

    let err = load_holdout(&features, &labels).expect_err("mismatch");
    assert!(matches!(
        err,
        IngestError::RowCountMismatch {
            feature_rows: 2,
            label_rows: 1,
            ..
        }
    ));
}

#[test]
fn non_numeric_cell_reports_position() {
    let dir = TempDir::new().expect("temp dir");
    let path = write(&dir, "X_test.csv", "a,b\n1,2\n3,oops\n");

    let err = read_numeric_table(&path).expect_err("bad cell");
    match err {
        IngestError::InvalidNumber {
            row, column, value, ..
        } => {
            assert_eq!(row, 2);
            assert_eq!(column, 1);
            assert_eq!(value, "oops");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn label_outside_binary_space_is_rejected() {
    let dir = TempDir::new().expect("temp dir");
    let features = write(&dir, "X_test.csv", "a\n1\n");
    let labels = write(&dir, "y_test.csv", "target\n2\n");

    let err = load_holdout(&features, &labels).expect_err("bad label");
    assert!(matches!(err, IngestError::Label { row: 1, .. }));
}

#[test]
fn missing_file_is_reported() {
    let dir = TempDir::new().expect("temp dir");
    let err = read_numeric_table(&dir.path().join("absent.csv")).expect_err("missing");
    assert!(matches!(err, IngestError::Csv { .. }));
}

#[test]
fn manifest_is_optional() {
    let dir = TempDir::new().expect("temp dir");
    let paths = load_manifest(dir.path()).expect("defaults");
    assert_eq!(paths.model, dir.path().join("ann_model.json"));

    write(&dir, "artifacts.toml", "labels = \"truth.csv\"\n");
    let paths = load_manifest(dir.path()).expect("manifest");
    assert_eq!(paths.labels, dir.path().join("truth.csv"));
    assert_eq!(paths.features, dir.path().join("X_test.csv"));
}
