//! Folio Studio CLI.

use std::io::{self, IsTerminal};

use anyhow::{Context, Result};
use clap::{ColorChoice, Parser};
use folio_cli::logging::{LogConfig, LogFormat, init_logging};
use folio_client::HttpPersistence;
use folio_studio::{NotificationCenter, StudioError};
use tracing::level_filters::LevelFilter;

mod cli;
mod commands;
mod summary;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use crate::commands::{
    connect, load_settings, run_profile, run_projects, run_publish, run_validate,
};
use crate::summary::{print_commit, print_projects, print_submit, print_validation};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match run(&cli) {
        Ok(true) => 0,
        Ok(false) => 1,
        Err(error) => {
            report_error(&error);
            1
        }
    };
    std::process::exit(exit_code);
}

/// Run the selected command. Returns whether it succeeded.
fn run(cli: &Cli) -> Result<bool> {
    match &cli.command {
        Command::Validate(args) => run_validate(args).map(|result| print_validation(&result)),
        Command::Publish(args) => {
            let (persistence, mut notifications) = connect_with_settings(cli)?;
            let outcome = block_on(run_publish(args, &persistence))??;
            Ok(print_submit(&outcome, &mut notifications))
        }
        Command::Profile(args) => {
            let (persistence, mut notifications) = connect_with_settings(cli)?;
            let outcome = block_on(run_profile(args, &persistence))??;
            Ok(print_commit(&outcome, &mut notifications))
        }
        Command::Projects(args) => {
            let (persistence, _) = connect_with_settings(cli)?;
            let projects = block_on(run_projects(args, &persistence))??;
            print_projects(&args.owner, &projects);
            Ok(true)
        }
    }
}

/// Load settings, then build the API client and notification center from them.
fn connect_with_settings(cli: &Cli) -> Result<(HttpPersistence, NotificationCenter)> {
    let settings = load_settings(cli)?;
    let persistence = connect(&settings)?;
    Ok((persistence, NotificationCenter::new(&settings.notifications)))
}

/// Drive a network command on a current-thread runtime.
fn block_on<F: Future>(future: F) -> Result<F::Output> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("start async runtime")?;
    Ok(runtime.block_on(future))
}

/// Print an error chain and, for known studio errors, a hint.
fn report_error(error: &anyhow::Error) {
    eprintln!("error: {error:#}");
    let hint = error.chain().find_map(|cause| {
        if let Some(studio) = cause.downcast_ref::<StudioError>() {
            studio.suggestion()
        } else if let Some(client) = cause.downcast_ref::<folio_client::ClientError>() {
            Some(client.user_message())
        } else {
            None
        }
    });
    if let Some(hint) = hint {
        eprintln!("hint: {hint}");
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
    config.with_timestamps = cli.log_timestamps;
    config.with_target = cli.log_target;
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
