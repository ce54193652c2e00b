//! Tumor diagnosis console.

use clap::{ColorChoice, Parser};
use diagnosis_cli::logging::{LogConfig, LogFormat, init_logging};
use diagnosis_core::Artifacts;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;

mod cli;
mod commands;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use crate::commands::{run_charts, run_features, run_predict, run_session};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let rng = cli
        .seed
        .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
    let result = match cli.command.unwrap_or(Command::Session) {
        Command::Features => {
            run_features();
            Ok(())
        }
        command => Artifacts::load(&cli.artifacts)
            .map_err(anyhow::Error::from)
            .and_then(|artifacts| dispatch(command, &artifacts, rng)),
    };
    let exit_code = match result {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

fn dispatch(command: Command, artifacts: &Artifacts, rng: StdRng) -> anyhow::Result<()> {
    match command {
        Command::Session => run_session(artifacts, rng),
        Command::Predict(args) => run_predict(artifacts, &args, rng),
        Command::Charts => {
            run_charts(artifacts);
            Ok(())
        }
        Command::Features => {
            run_features();
            Ok(())
        }
    }
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
