mod cli_args;
mod commands;
mod output;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use colored::*;
use log;
use std::process;

use cli_args::Cli;
use rules_core::{AppError, Config};

const FAILURE_EXIT_CODE: i32 = 1;

fn main() {
    let cli_args = match Cli::try_parse() {
        Ok(args) => args,
        Err(e) => {
            // --help and --version go to stdout and are not failures.
            let exit_code = if e.use_stderr() { FAILURE_EXIT_CODE } else { 0 };
            if let Err(print_err) = e.print() {
                eprintln!("Failed to print argument error: {}", print_err);
            }
            process::exit(exit_code);
        }
    };

    setup_logging(cli_args.quiet, cli_args.verbose);
    log::debug!("CLI args parsed: {:?}", cli_args);

    let result = Config::from_env()
        .map_err(anyhow::Error::from)
        .and_then(|config| run_app(&cli_args, &config));

    // Every failure, whatever its kind, maps to the same exit code.
    let exit_code = match result {
        Ok(()) => {
            log::info!("Application finished successfully.");
            0
        }
        Err(e) => report_failure(&e, cli_args.quiet),
    };
    log::debug!("Exiting with code {}", exit_code);
    process::exit(exit_code);
}

fn setup_logging(quiet: bool, verbose: u8) {
    let log_level = if quiet {
        log::LevelFilter::Off // -q silences everything, errors are still printed by main
    } else {
        match verbose {
            0 => log::LevelFilter::Warn,  // Default
            1 => log::LevelFilter::Info,  // -v
            2 => log::LevelFilter::Debug, // -vv
            _ => log::LevelFilter::Trace, // -vvv and more
        }
    };
    env_logger::Builder::new()
        .filter_level(log_level)
        .format_timestamp(None)
        .init();
    log::trace!("Logger initialized with level: {:?}", log_level);
}

/// Runs one invocation against an already resolved configuration. Never
/// terminates the process; `main` owns the exit code.
fn run_app(cli: &Cli, config: &Config) -> Result<()> {
    if cli.list {
        log::debug!("Executing list mode...");
        commands::list::handle_list_command(cli, config)?;
    } else {
        log::debug!("Executing build mode...");
        commands::build::handle_build_command(cli, config)?;
    }
    Ok(())
}

fn report_failure(err: &anyhow::Error, quiet: bool) -> i32 {
    eprintln!("{} {:#}", "Error:".red().bold(), err);
    if is_usage_failure(err) && !quiet {
        println!();
        if let Err(help_err) = Cli::command().print_help() {
            log::warn!("Failed to print usage: {}", help_err);
        }
    }
    FAILURE_EXIT_CODE
}

fn is_usage_failure(err: &anyhow::Error) -> bool {
    err.downcast_ref::<AppError>()
        .is_some_and(AppError::is_usage_error)
}
