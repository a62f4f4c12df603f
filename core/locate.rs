use crate::error::{AppError, Result};
use crate::invocation::{RULE_EXTENSION, Selection};
use glob::{MatchOptions, Pattern};
use log;
use std::path::{Path, PathBuf};

/// A rule document selected for aggregation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleFile {
    pub path: PathBuf,
}

impl RuleFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File name without directory, e.g. `frontend.md`.
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

/// Files resolved for a selection, in aggregation order. The same file can
/// appear more than once when requests overlap.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleSet {
    pub files: Vec<RuleFile>,
    /// Requested `<name>.md` files that matched nothing.
    pub missing: Vec<String>,
}

impl RuleSet {
    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn has_missing(&self) -> bool {
        !self.missing.is_empty()
    }
}

pub fn locate_rules(base: &Path, selection: &Selection) -> Result<RuleSet> {
    log::debug!(
        "Locating rule files in {} for {:?}",
        base.display(),
        selection
    );
    match selection {
        Selection::All => {
            let files = list_rule_files(base)?;
            if files.is_empty() {
                return Err(AppError::NotFound {
                    pattern: format!("*.{}", RULE_EXTENSION),
                    base: base.to_path_buf(),
                });
            }
            log::info!("Selected all {} rule files.", files.len());
            Ok(RuleSet {
                files,
                missing: Vec::new(),
            })
        }
        Selection::Named(names) => locate_named(base, names),
    }
}

/// Every `.md` file directly inside `base`, sorted by path. An empty result is not an error.
pub fn list_rule_files(base: &Path) -> Result<Vec<RuleFile>> {
    let mut files = glob_rule_files(base, "*")?;
    files.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(files)
}

fn locate_named(base: &Path, names: &[String]) -> Result<RuleSet> {
    let mut rule_set = RuleSet::default();

    for name in names {
        let mut matches = glob_rule_files(base, name)?;
        if matches.is_empty() {
            log::debug!("No rule file matched '{}'", name);
            rule_set
                .missing
                .push(format!("{}.{}", name, RULE_EXTENSION));
        } else {
            log::trace!("'{}' matched {} file(s)", name, matches.len());
            rule_set.files.append(&mut matches);
        }
    }

    if rule_set.is_empty() {
        return Err(AppError::NotFound {
            pattern: names
                .iter()
                .map(|n| format!("{}.{}", n, RULE_EXTENSION))
                .collect::<Vec<_>>()
                .join(", "),
            base: base.to_path_buf(),
        });
    }

    if rule_set.has_missing() {
        log::debug!("Rule files not found: {}", rule_set.missing.join(", "));
    }
    log::info!(
        "Selected {} rule files ({} missing).",
        rule_set.len(),
        rule_set.missing.len()
    );
    Ok(rule_set)
}

fn glob_rule_files(base: &Path, stem_pattern: &str) -> Result<Vec<RuleFile>> {
    let escaped_base = Pattern::escape(&base.to_string_lossy());
    let pattern = Path::new(&escaped_base)
        .join(format!("{}.{}", stem_pattern, RULE_EXTENSION))
        .to_string_lossy()
        .to_string();
    log::trace!("Globbing {}", pattern);

    let options = MatchOptions {
        case_sensitive: true,
        // `*` must not cross into subdirectories
        require_literal_separator: true,
        // dot-files such as `.draft.md` still count as rules
        require_literal_leading_dot: false,
    };

    let mut files = Vec::new();
    for entry in glob::glob_with(&pattern, options)? {
        match entry {
            Ok(path) => {
                if path.is_file() {
                    files.push(RuleFile::new(path));
                } else {
                    log::trace!("Skipping non-file match: {}", path.display());
                }
            }
            Err(e) => {
                // Unreadable entry: skip it, keep globbing
                log::warn!(
                    "Error accessing path while searching rules: {} (at {})",
                    e.error(),
                    e.path().display()
                );
            }
        }
    }
    Ok(files)
}
