//! Line-oriented session commands.
//!
//! Each input line is one user action. The console turns it into session
//! operations and returns the text to print; it never reads or writes the
//! terminal itself, so the loop in `main` stays trivial.

use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDateTime};
use rand::rngs::StdRng;
use tracing::warn;

use diagnosis_core::{Artifacts, DEFAULT_EXPORT_FILE, Session, write_history_csv};
use diagnosis_model::{DiagnosisError, Feature};

use crate::render::{chart_table, feature_table, form_table, history_table, outcome_table};

pub const HELP: &str = "\
commands:
  show                   print the current form
  set <feature> <value>  edit one field (feature key, label or number 1-30)
  fill [ROW]             auto-fill from a random held-out sample, or from ROW
  reset                  clear the form back to zeros
  predict                run the model on the form and record the result
  history                print the prediction history
  export [PATH]          write the history as CSV
  charts                 list the performance charts
  features               list the feature catalogue
  help                   show this help
  quit                   leave the session";

/// Output of one handled line.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Reply {
    pub lines: Vec<String>,
    pub exit: bool,
}

impl Reply {
    fn text(text: impl Into<String>) -> Self {
        Self {
            lines: vec![text.into()],
            exit: false,
        }
    }

    fn error(error: impl std::fmt::Display) -> Self {
        Self::text(format!("error: {error}"))
    }

    fn with(mut self, text: impl Into<String>) -> Self {
        self.lines.push(text.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Action<'l> {
    Help,
    Show,
    Set { feature: Feature, value: f64 },
    Fill(Option<usize>),
    Reset,
    Predict,
    History,
    Export(Option<&'l str>),
    Charts,
    Features,
    Quit,
}

fn parse_feature(name: &str) -> Result<Feature, DiagnosisError> {
    if let Ok(number) = name.parse::<usize>() {
        return number
            .checked_sub(1)
            .and_then(Feature::from_index)
            .ok_or_else(|| DiagnosisError::UnknownFeature(name.to_string()));
    }
    Feature::parse(name).ok_or_else(|| DiagnosisError::UnknownFeature(name.to_string()))
}

fn parse_action(line: &str) -> Result<Option<Action<'_>>, String> {
    let mut tokens = line.split_whitespace();
    let Some(command) = tokens.next() else {
        return Ok(None);
    };
    let rest: Vec<&str> = tokens.collect();
    let action = match command.to_ascii_lowercase().as_str() {
        "help" | "?" => Action::Help,
        "show" | "form" => Action::Show,
        "set" => {
            let Some((raw_value, name)) = rest.split_last().filter(|(_, name)| !name.is_empty())
            else {
                return Err("usage: set <feature> <value>".to_string());
            };
            let value = raw_value
                .parse::<f64>()
                .map_err(|_| format!("'{raw_value}' is not a number"))?;
            let feature = parse_feature(&name.join(" ")).map_err(|e| e.to_string())?;
            Action::Set { feature, value }
        }
        "fill" => match rest.as_slice() {
            [] => Action::Fill(None),
            [row] => Action::Fill(Some(
                row.parse::<usize>()
                    .map_err(|_| format!("'{row}' is not a row number"))?,
            )),
            _ => return Err("usage: fill [ROW]".to_string()),
        },
        "reset" => Action::Reset,
        "predict" => Action::Predict,
        "history" => Action::History,
        "export" => match rest.as_slice() {
            [] => Action::Export(None),
            [path] => Action::Export(Some(*path)),
            _ => return Err("usage: export [PATH]".to_string()),
        },
        "charts" => Action::Charts,
        "features" => Action::Features,
        "quit" | "exit" | "q" => Action::Quit,
        other => return Err(format!("unknown command '{other}' (try 'help')")),
    };
    Ok(Some(action))
}

fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// One interactive session bound to the process-wide artifacts.
pub struct Console<'a> {
    artifacts: &'a Artifacts,
    session: Session,
    rng: StdRng,
    clock: fn() -> NaiveDateTime,
    export_path: PathBuf,
}

impl<'a> Console<'a> {
    pub fn new(artifacts: &'a Artifacts, rng: StdRng) -> Self {
        Self {
            artifacts,
            session: Session::new(),
            rng,
            clock: now,
            export_path: PathBuf::from(DEFAULT_EXPORT_FILE),
        }
    }

    /// Replace the wall clock used to timestamp history entries.
    pub fn with_clock(mut self, clock: fn() -> NaiveDateTime) -> Self {
        self.clock = clock;
        self
    }

    /// Default target of `export` without a path.
    pub fn with_export_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.export_path = path.into();
        self
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn prompt(&self) -> String {
        match self.session.sample() {
            Some(sample) => format!("diagnosis [{sample}]> "),
            None => "diagnosis> ".to_string(),
        }
    }

    pub fn handle_line(&mut self, line: &str) -> Reply {
        match parse_action(line) {
            Ok(Some(action)) => self.run(action),
            Ok(None) => Reply::default(),
            Err(message) => Reply::error(message),
        }
    }

    fn run(&mut self, action: Action<'_>) -> Reply {
        match action {
            Action::Help => Reply::text(HELP),
            Action::Show => Reply::text(self.form()),
            Action::Set { feature, value } => match self.session.set_feature(feature, value) {
                Ok(()) => Reply::text(format!("{} = {value:.4}", feature.label())),
                Err(error) => Reply::error(error),
            },
            Action::Fill(row) => self.fill(row),
            Action::Reset => {
                self.session.reset();
                Reply::text("Form reset.").with(self.form())
            }
            Action::Predict => self.predict(),
            Action::History => Reply::text(history_table(self.session.history())),
            Action::Export(path) => {
                let target = path.map_or_else(|| self.export_path.clone(), PathBuf::from);
                self.export(&target)
            }
            Action::Charts => Reply::text(chart_table(&self.artifacts.chart_gallery())),
            Action::Features => Reply::text(feature_table()),
            Action::Quit => Reply {
                lines: Vec::new(),
                exit: true,
            },
        }
    }

    fn form(&self) -> String {
        form_table(self.session.form(), self.session.state())
    }

    fn fill(&mut self, row: Option<usize>) -> Reply {
        let provider = self.artifacts.sample_provider();
        let result = match row {
            Some(index) => self.session.fill_from_row(&provider, index),
            None => self.session.fill_from_sample(&provider, &mut self.rng),
        };
        match result {
            Ok(sample) => Reply::text(format!(
                "Filled from held-out sample {sample} (values converted back to original units)."
            ))
            .with(self.form()),
            Err(error) => {
                warn!(%error, "auto-fill failed");
                Reply::error(error)
            }
        }
    }

    fn predict(&mut self) -> Reply {
        let predictor = self.artifacts.predictor();
        let at = (self.clock)();
        match self
            .session
            .predict(&predictor, &self.artifacts.holdout, at)
        {
            Ok(outcome) => Reply::text(outcome_table(&outcome)),
            Err(error) => Reply::error(error),
        }
    }

    fn export(&self, path: &Path) -> Reply {
        let history = self.session.history();
        if history.is_empty() {
            return Reply::text("Nothing to export yet.");
        }
        match write_history_csv(path, history) {
            Ok(()) => Reply::text(format!(
                "Exported {} prediction(s) to {}.",
                history.len(),
                path.display()
            )),
            Err(error) => Reply::error(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use diagnosis_model::FEATURE_COUNT;

    use super::*;

    #[test]
    fn blank_line_is_ignored() {
        assert_eq!(parse_action("   "), Ok(None));
    }

    #[test]
    fn set_accepts_multi_word_labels_and_numbers() {
        let expected = Feature::parse("concave_points_mean").expect("feature");
        assert_eq!(
            parse_action("set Concave Points Mean 0.12"),
            Ok(Some(Action::Set {
                feature: expected,
                value: 0.12
            }))
        );
        assert_eq!(
            parse_action("set 8 -1.5"),
            Ok(Some(Action::Set {
                feature: expected,
                value: -1.5
            }))
        );
    }

    #[test]
    fn set_rejects_bad_input() {
        assert!(parse_action("set radius_mean").is_err());
        assert!(parse_action("set radius_mean abc").is_err());
        assert!(parse_action("set nothing 1.0").is_err());
        assert!(parse_action(&format!("set {} 1.0", FEATURE_COUNT + 1)).is_err());
        assert!(parse_action("set 0 1.0").is_err());
    }

    #[test]
    fn fill_and_export_arguments() {
        assert_eq!(parse_action("fill"), Ok(Some(Action::Fill(None))));
        assert_eq!(parse_action("FILL 4"), Ok(Some(Action::Fill(Some(4)))));
        assert!(parse_action("fill four").is_err());
        assert_eq!(
            parse_action("export out.csv"),
            Ok(Some(Action::Export(Some("out.csv"))))
        );
        assert!(parse_action("dance").is_err());
    }
}
