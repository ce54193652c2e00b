use std::fs;

use diagnosis_ingest::read_json_artifact;
use tempfile::TempDir;

#[test]
fn fitted_parameters_load_bit_exact() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("params.json");
    let scales: Vec<f64> = (0..30).map(|i| 0.5 + f64::from(i) * 0.1).collect();
    fs::write(&path, serde_json::to_string(&scales).expect("serialize")).expect("write params");

    let loaded: Vec<f64> = read_json_artifact(&path).expect("read params");

    let written_bits: Vec<u64> = scales.iter().map(|value| value.to_bits()).collect();
    let loaded_bits: Vec<u64> = loaded.iter().map(|value| value.to_bits()).collect();
    assert_eq!(loaded_bits, written_bits);
}

#[test]
fn shortest_repr_values_parse_to_the_same_bits() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("scale.json");
    fs::write(&path, "[1.9000000000000001]").expect("write scale");

    let loaded: Vec<f64> = read_json_artifact(&path).expect("read scale");

    assert_eq!(loaded[0].to_bits(), (0.5 + 14.0 * 0.1_f64).to_bits());
}
