use crate::cli_args::Cli;
use crate::output::{self, RuleListing};
use anyhow::{Context, Result};
use log;
use rules_core::{self as core, AppError, Config, RuleFile};

pub fn handle_list_command(cli: &Cli, config: &Config) -> Result<RuleListing> {
    let files = core::list_rule_files(config.rules_path())
        .context("Failed to list rule files")?;
    log::debug!("Found {} rule files for listing", files.len());
    if files.is_empty() {
        // Missing or empty rules directory
        return Err(AppError::NotFound {
            pattern: format!("*.{}", core::RULE_EXTENSION),
            base: config.rules_path().to_path_buf(),
        }
        .into());
    }

    let listing = RuleListing {
        rules_path: output::display_path(config.rules_path()),
        rules: files.iter().map(RuleFile::file_name).collect(),
    };
    output::print_rule_listing(&listing, cli.wants_json())?;
    Ok(listing)
}
