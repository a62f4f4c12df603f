use anyhow::{Context, Result};
use colored::*;
use rules_core::{AggregateReport, RULES_PATH_ENV};
use serde::Serialize;
use std::io::{self, Write};
use std::path::Path;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleListing {
    pub rules_path: String,
    pub rules: Vec<String>,
}

pub fn print_build_report(report: &AggregateReport, quiet: bool) {
    if quiet {
        return;
    }
    println!(
        "{} Rules file written: {}",
        "✅".green(),
        report.output_path.display().to_string().blue()
    );
    println!(
        "{} {}",
        "Files combined:".green(),
        report.file_count.to_string().cyan()
    );
}

pub fn print_missing_warning(missing: &[String], quiet: bool) {
    if quiet || missing.is_empty() {
        return;
    }
    println!(
        "{} {}",
        "Warning: rule files not found:".yellow(),
        missing.join(", ")
    );
}

pub fn print_rule_listing(listing: &RuleListing, json: bool) -> Result<()> {
    if json {
        let content =
            serde_json::to_string_pretty(listing).context("Failed to serialize rule listing")?;
        return write_to_stdout(&content);
    }

    let mut text = format!(
        "{}: {}\n{}\n",
        RULES_PATH_ENV.green().bold(),
        listing.rules_path,
        "Available .md files:".green()
    );
    for name in &listing.rules {
        text.push_str(name);
        text.push('\n');
    }
    write_to_stdout(&text)
}

pub fn display_path(path: &Path) -> String {
    path.display().to_string()
}

fn write_to_stdout(content: &str) -> Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    handle
        .write_all(content.as_bytes())
        .context("Failed to write to stdout")?;
    if !content.ends_with('\n') {
        handle
            .write_all(b"\n")
            .context("Failed to write newline to stdout")?;
    }
    handle.flush().context("Failed to flush stdout")?;
    Ok(())
}
