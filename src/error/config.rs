use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read body file '{path}': {source}")]
    ReadBodyFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to read header file '{path}': {source}")]
    ReadHeaderFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to read job file '{path}': {source}")]
    ReadJobFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse JSON job file '{path}': {source}")]
    ParseJobFile {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Invalid mode '{value}' in job. Use console, file, or both.")]
    InvalidJobMode { value: String },
    #[error("Invalid timeout '{value}' in job: {source}")]
    InvalidJobTimeout {
        value: String,
        #[source]
        source: Box<super::AppError>,
    },
    #[cfg(test)]
    #[error("Test expectation failed: {message}")]
    TestExpectation { message: &'static str },
    #[cfg(test)]
    #[error("Test expectation failed: {message}: {value}")]
    TestExpectationValue {
        message: &'static str,
        value: String,
    },
}
