use crate::error::{AppError, Result};
use crate::locate::RuleFile;
use log;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Appended after every rule document, including the last one.
pub const SEPARATOR: &[u8] = b"\n\n";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregateReport {
    pub output_path: PathBuf,
    pub file_count: usize,
    pub bytes_written: usize,
}

/// `.clinerules` for `cline`, `.rules` for an empty editor.
pub fn output_file_name(editor: &str) -> String {
    format!(".{}rules", editor)
}

pub fn output_path(output_dir: &Path, editor: &str) -> PathBuf {
    output_dir.join(output_file_name(editor))
}

/// Reads every file in order and joins the raw bytes. The first unreadable
/// file aborts the whole combination.
pub fn combine_files(files: &[RuleFile]) -> Result<Vec<u8>> {
    let mut content = Vec::new();
    for file in files {
        let data = fs::read(file.path()).map_err(|e| AppError::FileRead {
            path: file.path().to_path_buf(),
            source: e,
        })?;
        log::trace!("Read {} bytes from {}", data.len(), file.path().display());
        content.extend_from_slice(&data);
        content.extend_from_slice(SEPARATOR);
    }
    Ok(content)
}

/// Creates or truncates `path` and writes `content` to it.
pub fn write_output(path: &Path, content: &[u8]) -> Result<()> {
    let to_write_error = |e: std::io::Error| AppError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    };

    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o644);
    }

    let mut file = options.open(path).map_err(to_write_error)?;
    file.write_all(content).map_err(to_write_error)?;
    file.flush().map_err(to_write_error)?;
    Ok(())
}

/// Combines `files` into `.<editor>rules` inside `output_dir`.
pub fn aggregate(files: &[RuleFile], editor: &str, output_dir: &Path) -> Result<AggregateReport> {
    log::info!("Combining {} rule files...", files.len());
    let content = combine_files(files)?;

    let output_path = output_path(output_dir, editor);
    log::debug!(
        "Writing {} bytes to {}",
        content.len(),
        output_path.display()
    );
    write_output(&output_path, &content)?;

    Ok(AggregateReport {
        output_path,
        file_count: files.len(),
        bytes_written: content.len(),
    })
}
