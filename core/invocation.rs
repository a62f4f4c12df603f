use crate::error::{AppError, Result};
use log;

pub const RULE_EXTENSION: &str = "md";

/// Which rule documents a run should combine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// Every `.md` file in the rules directory.
    All,
    /// Bare rule names (no extension), in the order they were requested.
    Named(Vec<String>),
}

impl Selection {
    pub fn is_all(&self) -> bool {
        matches!(self, Selection::All)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationArgs {
    pub editor: String,
    pub selection: Selection,
}

impl InvocationArgs {
    /// Builds the invocation from positional tokens: the first is the editor,
    /// the rest are rule names. No tokens at all means "no editor suffix, all rules".
    pub fn from_positionals<I, S>(tokens: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut tokens = tokens.into_iter();
        let editor = match tokens.next() {
            Some(token) => validate_editor(token.as_ref())?,
            None => String::new(),
        };

        let names = tokens
            .map(|token| normalize_rule_name(token.as_ref()))
            .collect::<Result<Vec<_>>>()?;

        let selection = if names.is_empty() {
            Selection::All
        } else {
            Selection::Named(names)
        };
        log::debug!("Invocation: editor={:?}, selection={:?}", editor, selection);

        Ok(Self { editor, selection })
    }
}

// The editor becomes part of a file name in the output directory, so it must
// not be able to point anywhere else.
fn validate_editor(raw: &str) -> Result<String> {
    if let Some(bad) = raw
        .chars()
        .find(|c| *c == '/' || *c == '\\' || c.is_control())
    {
        return Err(AppError::InvalidArgument(format!(
            "Editor name '{}' contains an unsupported character {:?}",
            raw.escape_debug(),
            bad
        )));
    }
    Ok(raw.to_string())
}

fn normalize_rule_name(raw: &str) -> Result<String> {
    let trimmed = raw.trim();
    let name = trimmed
        .strip_suffix(RULE_EXTENSION)
        .and_then(|stem| stem.strip_suffix('.'))
        .unwrap_or(trimmed);
    if name.is_empty() {
        return Err(AppError::InvalidArgument(format!(
            "Rule name cannot be empty (got '{}')",
            raw
        )));
    }
    if name != raw {
        log::trace!("Normalized rule name '{}' to '{}'", raw, name);
    }
    Ok(name.to_string())
}
