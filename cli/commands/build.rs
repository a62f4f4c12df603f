use crate::cli_args::Cli;
use crate::output;
use anyhow::{Context, Result};
use log;
use rules_core::{self as core, AggregateReport, Config, InvocationArgs};

pub fn handle_build_command(cli: &Cli, config: &Config) -> Result<AggregateReport> {
    let invocation = InvocationArgs::from_positionals(cli.positionals())
        .context("Failed to parse command-line arguments")?;
    log::info!(
        "Building {} from {}",
        core::output_file_name(&invocation.editor),
        output::display_path(config.rules_path())
    );

    if invocation.selection.is_all() {
        log::debug!("No rule names given, combining every rule file");
    }

    let rule_set = core::locate_rules(config.rules_path(), &invocation.selection)
        .context("Failed to locate rule files")?;
    log::debug!("Located {} rule files", rule_set.len());
    output::print_missing_warning(&rule_set.missing, cli.quiet);

    let report = core::aggregate(&rule_set.files, &invocation.editor, config.output_dir())
        .context("Failed to build rules file")?;
    log::debug!(
        "Wrote {} bytes to {}",
        report.bytes_written,
        report.output_path.display()
    );

    output::print_build_report(&report, cli.quiet);
    Ok(report)
}
