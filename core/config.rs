use crate::error::{AppError, Result};
use log;
use std::env;
use std::path::{Path, PathBuf};

pub const RULES_PATH_ENV: &str = "RULES_PATH";

/// Settings for a single run: where rule documents live and where the
/// combined file is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub rules_path: PathBuf,
    pub output_dir: PathBuf,
}

impl Config {
    /// Reads `RULES_PATH` and the working directory of the current process.
    pub fn from_env() -> Result<Self> {
        let rules_path = env::var(RULES_PATH_ENV).ok();
        let output_dir = env::current_dir().map_err(|e| {
            AppError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to determine current directory: {}", e),
            ))
        })?;
        Self::resolve(rules_path.as_deref(), output_dir)
    }

    pub fn resolve(rules_path: Option<&str>, output_dir: PathBuf) -> Result<Self> {
        let rules_path = resolve_rules_path(rules_path)?;
        log::debug!(
            "Resolved {}={} (output dir: {})",
            RULES_PATH_ENV,
            rules_path.display(),
            output_dir.display()
        );
        Ok(Self {
            rules_path,
            output_dir,
        })
    }

    pub fn rules_path(&self) -> &Path {
        &self.rules_path
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }
}

fn resolve_rules_path(raw: Option<&str>) -> Result<PathBuf> {
    let raw = raw.filter(|s| !s.trim().is_empty()).ok_or_else(|| {
        AppError::Config(format!(
            "{} environment variable is not set",
            RULES_PATH_ENV
        ))
    })?;
    let expanded = shellexpand::tilde(raw);
    if expanded != raw {
        log::trace!("Expanded {} '{}' to '{}'", RULES_PATH_ENV, raw, expanded);
    }
    let path = PathBuf::from(expanded.into_owned());
    if !path.is_dir() {
        log::warn!(
            "{} does not point to an existing directory: {}",
            RULES_PATH_ENV,
            path.display()
        );
    }
    Ok(path)
}
