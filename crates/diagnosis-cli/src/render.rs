//! Terminal rendering of the form, results, history and charts.

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use diagnosis_core::{FormState, PredictionOutcome};
use diagnosis_ingest::{ChartEntry, ChartStatus};
use diagnosis_model::{Diagnosis, FeatureVector, GroundTruth, HistoryEntry, features};

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_report_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

fn diagnosis_color(diagnosis: Diagnosis) -> Color {
    match diagnosis {
        Diagnosis::Benign => Color::Green,
        Diagnosis::Malignant => Color::Red,
    }
}

fn diagnosis_cell(diagnosis: Diagnosis) -> Cell {
    Cell::new(diagnosis)
        .fg(diagnosis_color(diagnosis))
        .add_attribute(Attribute::Bold)
}

fn ground_truth_cell(truth: GroundTruth) -> Cell {
    match truth {
        GroundTruth::Known(diagnosis) => Cell::new(diagnosis).fg(diagnosis_color(diagnosis)),
        GroundTruth::Unknown => dim_cell(truth),
    }
}

fn form_source(state: FormState) -> String {
    match state {
        FormState::Manual => "manual entry".to_string(),
        FormState::Prefilled(sample) => format!("held-out sample {sample}"),
    }
}

/// One row per feature, in model input order.
pub fn form_table(form: &FeatureVector, state: FormState) -> String {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Feature"),
        header_cell("Value"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for (feature, value) in form.iter() {
        let value_cell = if value == 0.0 {
            dim_cell(format!("{value:.4}"))
        } else {
            Cell::new(format!("{value:.4}"))
        };
        table.add_row(vec![
            dim_cell(feature.index() + 1),
            Cell::new(feature.label()),
            value_cell,
        ]);
    }
    format!("Form ({}):\n{table}", form_source(state))
}

/// Result banner plus the ground-truth line.
pub fn outcome_table(outcome: &PredictionOutcome) -> String {
    let prediction = outcome.prediction;
    let mut table = Table::new();
    apply_report_style(&mut table);
    table.add_row(vec![
        header_cell("Result"),
        diagnosis_cell(prediction.diagnosis),
        dim_cell(format!(
            "confidence {:.1}%",
            prediction.confidence() * 100.0
        )),
    ]);
    table.add_row(vec![
        header_cell("Ground truth"),
        ground_truth_cell(outcome.ground_truth),
        match outcome.ground_truth.diagnosis() {
            Some(truth) if truth == prediction.diagnosis => Cell::new("match").fg(Color::Green),
            Some(_) => Cell::new("mismatch")
                .fg(Color::Red)
                .add_attribute(Attribute::Bold),
            None => dim_cell("-"),
        },
    ]);
    table.to_string()
}

pub fn history_table(history: &[HistoryEntry]) -> String {
    if history.is_empty() {
        return "No predictions yet.".to_string();
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Time"),
        header_cell("Predicted"),
        header_cell("Ground Truth"),
        header_cell("Sample"),
    ]);
    apply_report_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);
    for (idx, entry) in history.iter().enumerate() {
        table.add_row(vec![
            dim_cell(idx + 1),
            Cell::new(entry.time_label()),
            diagnosis_cell(entry.predicted),
            ground_truth_cell(entry.ground_truth),
            entry
                .sample
                .map_or_else(|| dim_cell("-"), Cell::new),
        ]);
    }
    let known: Vec<bool> = history.iter().filter_map(HistoryEntry::is_correct).collect();
    let mut out = table.to_string();
    if !known.is_empty() {
        let correct = known.iter().filter(|hit| **hit).count();
        out.push_str(&format!(
            "\nCorrect on held-out samples: {correct}/{}",
            known.len()
        ));
    }
    out
}

pub fn chart_table(entries: &[ChartEntry]) -> String {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Chart"),
        header_cell("File"),
        header_cell("Status"),
    ]);
    apply_table_style(&mut table);
    for entry in entries {
        let status = match &entry.status {
            ChartStatus::Available { width, height } => {
                Cell::new(format!("{width}x{height}")).fg(Color::Green)
            }
            ChartStatus::Missing { reason } => {
                Cell::new(format!("[missing] {reason}")).fg(Color::Yellow)
            }
        };
        table.add_row(vec![
            Cell::new(&entry.caption),
            dim_cell(entry.path.display()),
            status,
        ]);
    }
    table.to_string()
}

pub fn feature_table() -> String {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Key"),
        header_cell("Label"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for feature in features() {
        table.add_row(vec![
            dim_cell(feature.index() + 1),
            Cell::new(feature.key()),
            Cell::new(feature.label()),
        ]);
    }
    table.to_string()
}
