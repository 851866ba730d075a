use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::args::OutputMode;
use crate::domain::ResultSet;
use crate::error::SinkError;

use super::format::write_block;
use super::path::resolve_output_path;

/// Where and how a finished batch is rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputPlan {
    pub mode: OutputMode,
    /// Output path template; may contain `{timestamp}`.
    pub path: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputSummary {
    /// Resolved file path and bytes appended to it, when the file sink ran.
    pub file: Option<(PathBuf, usize)>,
    pub console_bytes: usize,
}

/// Writes `results` to every sink `plan` selects: the file first, then the
/// console.
///
/// # Errors
///
/// Returns an error if the output file cannot be opened or written, or the
/// console write fails.
pub fn emit(plan: &OutputPlan, results: &ResultSet) -> Result<OutputSummary, SinkError> {
    let mut summary = OutputSummary::default();

    if plan.mode.writes_file() {
        let path = resolve_output_path(&plan.path, &chrono::Local::now());
        let written = write_file(&path, results)?;
        println!("wrote {} bytes", written);
        summary.file = Some((path, written));
    }

    if plan.mode.writes_console() {
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        summary.console_bytes = write_console(&mut handle, results)?;
    }

    Ok(summary)
}

/// Writes result blocks to `writer` and returns the byte count.
///
/// # Errors
///
/// Returns an error if rendering or writing fails.
pub fn write_console<W>(writer: &mut W, results: &ResultSet) -> Result<usize, SinkError>
where
    W: Write,
{
    let mut total: usize = 0;
    let mut block = String::new();
    for outcome in results {
        block.clear();
        write_block(&mut block, outcome)?;
        writer
            .write_all(block.as_bytes())
            .map_err(|err| SinkError::WriteConsole { source: err })?;
        total = total.saturating_add(block.len());
    }
    writer
        .flush()
        .map_err(|err| SinkError::WriteConsole { source: err })?;
    Ok(total)
}

/// Appends result blocks to `path`, creating it if needed.
///
/// Returns the number of bytes this call appended.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or written.
pub fn write_file(path: &Path, results: &ResultSet) -> Result<usize, SinkError> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|err| SinkError::OpenFile {
            path: path.to_path_buf(),
            source: err,
        })?;

    let mut total: usize = 0;
    let mut block = String::new();
    for outcome in results {
        block.clear();
        write_block(&mut block, outcome)?;
        file.write_all(block.as_bytes())
            .map_err(|err| SinkError::WriteFile {
                path: path.to_path_buf(),
                source: err,
            })?;
        total = total.saturating_add(block.len());
    }
    file.flush().map_err(|err| SinkError::WriteFile {
        path: path.to_path_buf(),
        source: err,
    })?;

    debug!("Appended {} bytes to {}", total, path.display());
    Ok(total)
}
