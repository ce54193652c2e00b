use std::fs;
use std::path::Path;

use chrono::{NaiveDate, NaiveDateTime};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tempfile::TempDir;

use diagnosis_cli::console::Console;
use diagnosis_core::{Artifacts, Classifier, FormState, ModelBundle, StandardScaler};
use diagnosis_ingest::{HoldoutSet, NumericTable, default_charts};
use diagnosis_model::{Diagnosis, FEATURE_COUNT, SampleRef};

/// Malignant iff the scaled first feature is positive; every mean is 10.
fn artifacts() -> Artifacts {
    let mut coefficients = vec![0.0; FEATURE_COUNT];
    coefficients[0] = 1.0;
    let bundle = ModelBundle {
        scaler: StandardScaler {
            mean: vec![10.0; FEATURE_COUNT],
            scale: vec![2.0; FEATURE_COUNT],
        },
        classifier: Classifier::Logistic {
            coefficients,
            intercept: 0.0,
        },
    };
    let headers = (0..FEATURE_COUNT).map(|i| format!("f{i}")).collect();
    let rows = vec![vec![-1.0; FEATURE_COUNT], vec![1.0; FEATURE_COUNT]];
    let holdout = HoldoutSet::new(
        NumericTable { headers, rows },
        vec![Diagnosis::Benign, Diagnosis::Benign],
    );
    Artifacts::new(bundle, holdout).with_charts(Path::new("no-such-dir"), default_charts())
}

fn noon() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 5, 17)
        .and_then(|date| date.and_hms_opt(12, 0, 0))
        .expect("valid timestamp")
}

fn console(artifacts: &Artifacts) -> Console<'_> {
    Console::new(artifacts, StdRng::seed_from_u64(7)).with_clock(noon)
}

fn text(lines: &[String]) -> String {
    lines.join("\n")
}

#[test]
fn quit_ends_the_session() {
    let artifacts = artifacts();
    let mut console = console(&artifacts);
    assert!(!console.handle_line("help").exit);
    assert!(console.handle_line("quit").exit);
    assert!(console.handle_line("  exit ").exit);
}

#[test]
fn unknown_commands_report_errors() {
    let artifacts = artifacts();
    let mut console = console(&artifacts);
    let reply = console.handle_line("launch");
    assert!(!reply.exit);
    assert!(reply.lines[0].starts_with("error: unknown command"));
}

#[test]
fn fill_row_links_sample_and_records_ground_truth() {
    let artifacts = artifacts();
    let mut console = console(&artifacts);

    let reply = console.handle_line("fill 1");
    assert!(text(&reply.lines).contains("held-out sample #1"));
    assert_eq!(console.session().state(), FormState::Prefilled(SampleRef(1)));
    assert_eq!(console.prompt(), "diagnosis [#1]> ");
    assert_eq!(console.session().form().as_slice()[0], 12.0);

    let reply = console.handle_line("predict");
    let out = text(&reply.lines);
    assert!(out.contains("Malignant"));
    assert!(out.contains("mismatch"));

    let history = console.session().history();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].predicted, Diagnosis::Malignant);
    assert_eq!(history[0].recorded_at, noon());
}

#[test]
fn editing_a_filled_form_detaches_the_sample() {
    let artifacts = artifacts();
    let mut console = console(&artifacts);
    console.handle_line("fill 0");

    let reply = console.handle_line("set radius_mean 9");
    assert_eq!(reply.lines, vec!["Radius Mean = 9.0000".to_string()]);
    assert_eq!(console.session().state(), FormState::Manual);
    assert_eq!(console.prompt(), "diagnosis> ");

    let out = text(&console.handle_line("predict").lines);
    assert!(out.contains("Benign"));
    assert!(out.contains("Unknown (manual entry)"));
}

#[test]
fn invalid_values_leave_the_form_alone() {
    let artifacts = artifacts();
    let mut console = console(&artifacts);
    let reply = console.handle_line("set 1 NaN");
    assert!(reply.lines[0].starts_with("error:"));
    assert_eq!(console.session().form().as_slice()[0], 0.0);

    let reply = console.handle_line("fill 9");
    assert!(reply.lines[0].starts_with("error:"));
    assert_eq!(console.session().state(), FormState::Manual);
}

#[test]
fn random_fill_uses_the_seeded_rng() {
    let artifacts = artifacts();
    let mut console = console(&artifacts);
    console.handle_line("fill");
    assert!(matches!(
        console.session().state(),
        FormState::Prefilled(SampleRef(index)) if index < 2
    ));
}

#[test]
fn reset_keeps_history() {
    let artifacts = artifacts();
    let mut console = console(&artifacts);
    console.handle_line("fill 1");
    console.handle_line("predict");
    let reply = console.handle_line("reset");
    assert_eq!(reply.lines[0], "Form reset.");
    assert_eq!(console.session().state(), FormState::Manual);
    assert!(console.session().form().iter().all(|(_, value)| value == 0.0));
    assert_eq!(console.session().history().len(), 1);
}

#[test]
fn export_writes_history_csv() {
    let artifacts = artifacts();
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("history.csv");
    let mut console = console(&artifacts).with_export_path(path.clone());

    let reply = console.handle_line("export");
    assert_eq!(reply.lines, vec!["Nothing to export yet.".to_string()]);
    assert!(!path.exists());

    console.handle_line("fill 0");
    console.handle_line("predict");
    let reply = console.handle_line("export");
    assert!(reply.lines[0].starts_with("Exported 1 prediction(s)"));

    let csv = fs::read_to_string(&path).expect("read export");
    let mut lines = csv.lines();
    assert_eq!(lines.next(), Some("Time,Predicted,Ground Truth"));
    assert_eq!(lines.next(), Some("12:00:00,Benign,Benign"));
    assert_eq!(lines.next(), None);
}

#[test]
fn charts_list_missing_images() {
    let artifacts = artifacts();
    let mut console = console(&artifacts);
    let out = text(&console.handle_line("charts").lines);
    assert!(out.contains("[missing]"));
}
