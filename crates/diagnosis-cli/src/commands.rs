use anyhow::{Context, Result, bail};
use chrono::Local;
use rand::rngs::StdRng;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tracing::{debug, info};

use diagnosis_cli::console::Console;
use diagnosis_cli::render::{chart_table, feature_table, form_table, outcome_table};
use diagnosis_core::{Artifacts, Session};
use diagnosis_model::FeatureVector;

use crate::cli::PredictArgs;

pub fn run_session(artifacts: &Artifacts, rng: StdRng) -> Result<()> {
    let mut console = Console::new(artifacts, rng);
    let mut editor = DefaultEditor::new().context("open line editor")?;
    println!(
        "Tumor diagnosis console: {} held-out samples available. Type 'help' for commands.",
        artifacts.holdout.len()
    );
    println!("{}", console.handle_line("show").lines.join("\n"));
    loop {
        match editor.readline(&console.prompt()) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    let _ = editor.add_history_entry(line.as_str());
                }
                let reply = console.handle_line(&line);
                for text in &reply.lines {
                    println!("{text}");
                }
                if reply.exit {
                    break;
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("(use 'quit' to leave)");
            }
            Err(ReadlineError::Eof) => break,
            Err(error) => return Err(error).context("read input"),
        }
    }
    info!(
        predictions = console.session().history().len(),
        "session ended"
    );
    Ok(())
}

pub fn run_predict(artifacts: &Artifacts, args: &PredictArgs, mut rng: StdRng) -> Result<()> {
    let mut session = Session::new();
    let provider = artifacts.sample_provider();
    match (&args.values, args.sample) {
        (Some(values), _) => {
            let form = FeatureVector::from_slice(values)?;
            session.set_form(form)?;
        }
        (None, Some(Some(row))) => {
            session.fill_from_row(&provider, row)?;
        }
        (None, Some(None)) => {
            session.fill_from_sample(&provider, &mut rng)?;
        }
        (None, None) => bail!("pass --values or --sample"),
    }
    debug!(state = ?session.state(), "form ready");
    if args.show_form {
        println!("{}", form_table(session.form(), session.state()));
    }
    let outcome = session.predict(
        &artifacts.predictor(),
        &artifacts.holdout,
        Local::now().naive_local(),
    )?;
    println!("{}", outcome_table(&outcome));
    Ok(())
}

pub fn run_features() {
    println!("{}", feature_table());
}

pub fn run_charts(artifacts: &Artifacts) {
    println!("{}", chart_table(&artifacts.chart_gallery()));
}
