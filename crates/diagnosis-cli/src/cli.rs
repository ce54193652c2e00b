//! CLI argument definitions for the diagnosis console.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use diagnosis_ingest::DEFAULT_ARTIFACT_DIR;

#[derive(Parser)]
#[command(
    name = "diagnosis",
    version,
    about = "Tumor diagnosis console - predict benign or malignant from 30 measurements",
    long_about = "Load a trained classifier and its feature scaler, enter tumor measurements \
                  by hand or from a held-out test sample, and predict the diagnosis.\n\n\
                  Without a subcommand an interactive session is started."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Directory holding the model bundle, held-out tables and charts.
    #[arg(
        long = "artifacts",
        value_name = "DIR",
        default_value = DEFAULT_ARTIFACT_DIR,
        global = true
    )]
    pub artifacts: PathBuf,

    /// Seed for held-out sample draws (random when omitted).
    #[arg(long = "seed", value_name = "SEED", global = true)]
    pub seed: Option<u64>,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Start an interactive session (the default).
    Session,

    /// Predict once and exit.
    Predict(PredictArgs),

    /// List the 30 input features in model order.
    Features,

    /// List the performance charts and whether each can be shown.
    Charts,
}

#[derive(Parser)]
pub struct PredictArgs {
    /// Comma-separated measurements in feature order.
    #[arg(
        long = "values",
        value_name = "V1,V2,...",
        value_delimiter = ',',
        allow_hyphen_values = true,
        conflicts_with = "sample"
    )]
    pub values: Option<Vec<f64>>,

    /// Use a held-out sample: a random one, or ROW when given.
    #[arg(long = "sample", value_name = "ROW", num_args = 0..=1)]
    pub sample: Option<Option<usize>>,

    /// Also print the input form.
    #[arg(long = "show-form")]
    pub show_form: bool,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
