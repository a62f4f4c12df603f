use std::path::PathBuf;
use thiserror::Error;

pub type Result<T, E = AppError> = std::result::Result<T, E>;

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum AppError {
    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Invalid Argument: {0}")]
    InvalidArgument(String),

    #[error("Glob Pattern Error: {0}")]
    Glob(String),

    #[error("No rule files found: pattern '{pattern}' (path: {base})")]
    NotFound { pattern: String, base: PathBuf },

    #[error("Filesystem Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("File Read Error: Path '{path}', Error: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("File Write Error: Path '{path}', Error: {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl AppError {
    /// Errors caused by how the tool was invoked rather than by the filesystem.
    pub fn is_usage_error(&self) -> bool {
        matches!(self, AppError::Config(_) | AppError::InvalidArgument(_))
    }
}

impl From<glob::PatternError> for AppError {
    fn from(err: glob::PatternError) -> Self {
        AppError::Glob(format!("Invalid pattern at position {}: {}", err.pos, err.msg))
    }
}
