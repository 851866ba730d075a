use std::fmt::Display;
use std::path::PathBuf;

use chrono::{DateTime, TimeZone};

const TIMESTAMP_PLACEHOLDER: &str = "{timestamp}";
const TIMESTAMP_FORMAT: &str = "%Y%m%d%H%M%S";
const DEFAULT_OUTPUT_TEMPLATE: &str = "./results-{timestamp}.log";

/// Resolves an output path template against `now`.
///
/// Every `{timestamp}` becomes `YYYYMMDDHHMMSS`. An empty template falls back
/// to `./results-{timestamp}.log`.
#[must_use]
pub fn resolve_output_path<Tz>(template: &str, now: &DateTime<Tz>) -> PathBuf
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let template = if template.trim().is_empty() {
        DEFAULT_OUTPUT_TEMPLATE
    } else {
        template
    };
    let timestamp = now.format(TIMESTAMP_FORMAT).to_string();
    PathBuf::from(template.replace(TIMESTAMP_PLACEHOLDER, &timestamp))
}
