use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::args::parse_header_spec;
use crate::error::{AppError, AppResult, ConfigError, ValidationError};

const DEFAULT_METHOD: &str = "GET";

/// Raw inputs for one batch, before file overrides and normalization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestInput {
    pub method: String,
    pub url: String,
    pub amount: usize,
    pub body: String,
    pub body_file: Option<PathBuf>,
    pub headers: String,
    pub header_file: Option<PathBuf>,
    pub timeout: Option<Duration>,
}

/// Immutable description of a batch. Shared read-only by every unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestDescriptor {
    url: String,
    method: String,
    count: usize,
    headers: BTreeMap<String, String>,
    body: Vec<u8>,
    timeout: Option<Duration>,
}

impl RequestDescriptor {
    /// Validates and normalizes raw inputs.
    ///
    /// A body file replaces the inline body and a header file replaces the
    /// inline header spec. Line terminators are removed from header file text
    /// before parsing. The method is uppercased; an empty method means `GET`.
    ///
    /// # Errors
    ///
    /// Returns an error when the URL is empty, an override file cannot be
    /// read, or the header spec is malformed.
    pub fn from_input(input: RequestInput) -> AppResult<Self> {
        let RequestInput {
            method,
            url,
            amount,
            body,
            body_file,
            headers,
            header_file,
            timeout,
        } = input;

        if url.trim().is_empty() {
            return Err(AppError::validation(ValidationError::MissingUrl));
        }

        let body = match body_file.as_deref() {
            Some(path) => read_body_file(path)?,
            None => body.into_bytes(),
        };

        let header_spec = match header_file.as_deref() {
            Some(path) => read_header_file(path)?,
            None => headers,
        };
        let headers = parse_header_spec(&header_spec).map_err(|err| {
            AppError::validation(ValidationError::InvalidHeaders {
                source: Box::new(err),
            })
        })?;

        Ok(Self {
            url,
            method: normalize_method(&method),
            count: amount,
            headers,
            body,
            timeout,
        })
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    #[must_use]
    pub fn method(&self) -> &str {
        &self.method
    }

    #[must_use]
    pub const fn count(&self) -> usize {
        self.count
    }

    #[must_use]
    pub const fn headers(&self) -> &BTreeMap<String, String> {
        &self.headers
    }

    #[must_use]
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

fn normalize_method(method: &str) -> String {
    let trimmed = method.trim();
    if trimmed.is_empty() {
        return DEFAULT_METHOD.to_owned();
    }
    trimmed.to_ascii_uppercase()
}

fn read_body_file(path: &Path) -> AppResult<Vec<u8>> {
    std::fs::read(path).map_err(|err| {
        AppError::config(ConfigError::ReadBodyFile {
            path: path.to_path_buf(),
            source: err,
        })
    })
}

fn read_header_file(path: &Path) -> AppResult<String> {
    let content = std::fs::read_to_string(path).map_err(|err| {
        AppError::config(ConfigError::ReadHeaderFile {
            path: path.to_path_buf(),
            source: err,
        })
    })?;
    let spec: String = content
        .chars()
        .filter(|ch| !matches!(ch, '\r' | '\n'))
        .collect();
    tracing::debug!("Loaded header spec from {}: {}", path.display(), spec);
    Ok(spec)
}
