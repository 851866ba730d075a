use std::path::Path;

use crate::error::{AppError, AppResult, ConfigError};

use super::types::JobSpec;

/// Loads the JSON array of jobs at `path`.
///
/// # Errors
///
/// Returns an error when the file cannot be read or is not a JSON array of
/// job objects.
pub fn load_jobs(path: &Path) -> AppResult<Vec<JobSpec>> {
    let content = std::fs::read_to_string(path).map_err(|err| {
        AppError::config(ConfigError::ReadJobFile {
            path: path.to_path_buf(),
            source: err,
        })
    })?;
    let jobs: Vec<JobSpec> = serde_json::from_str(&content).map_err(|err| {
        AppError::config(ConfigError::ParseJobFile {
            path: path.to_path_buf(),
            source: err,
        })
    })?;
    tracing::debug!("Loaded {} job(s) from {}", jobs.len(), path.display());
    Ok(jobs)
}
