use std::collections::BTreeMap;
use std::time::Duration;

use crate::error::{AppError, AppResult, ValidationError};

/// Parses a compact header list such as `"Content-Type:application/json,X-Id:7"`.
///
/// All whitespace is removed before splitting, including whitespace inside
/// values. Each comma-separated segment is split on its first `:`. Empty
/// input yields an empty map. Header names are case-insensitive: a later
/// segment replaces any earlier one whose name differs only by case, and the
/// later spelling is kept.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidHeaderFormat`] for the first segment that
/// lacks a non-empty key or value. No partial map is returned.
pub fn parse_header_spec(spec: &str) -> Result<BTreeMap<String, String>, ValidationError> {
    let compact: String = spec.chars().filter(|ch| !ch.is_whitespace()).collect();
    let mut headers = BTreeMap::new();
    if compact.is_empty() {
        return Ok(headers);
    }

    for segment in compact.split(',') {
        let (key, value) = parse_header_segment(segment)?;
        headers.retain(|existing: &String, _| !existing.eq_ignore_ascii_case(key));
        headers.insert(key.to_owned(), value.to_owned());
    }
    Ok(headers)
}

fn parse_header_segment(segment: &str) -> Result<(&str, &str), ValidationError> {
    match segment.split_once(':') {
        Some((key, value)) if !key.is_empty() && !value.is_empty() => Ok((key, value)),
        Some(_) | None => Err(ValidationError::InvalidHeaderFormat {
            segment: segment.to_owned(),
        }),
    }
}

/// Parses a per-request timeout: digits followed by `ms`, `s`, `m` or `h`.
/// A bare number counts as seconds.
pub(crate) fn parse_duration_arg(raw: &str) -> AppResult<Duration> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(AppError::validation(ValidationError::DurationEmpty));
    }

    let (digits, unit) = value.split_at(value.bytes().take_while(u8::is_ascii_digit).count());
    if digits.is_empty() {
        return Err(AppError::validation(
            ValidationError::InvalidDurationFormat {
                value: value.to_owned(),
            },
        ));
    }
    let amount: u64 = digits.parse().map_err(|err| {
        AppError::validation(ValidationError::InvalidDurationNumber {
            value: value.to_owned(),
            source: err,
        })
    })?;

    let millis = amount
        .checked_mul(millis_per_unit(unit)?)
        .ok_or_else(|| AppError::validation(ValidationError::DurationOverflow))?;
    if millis == 0 {
        return Err(AppError::validation(ValidationError::DurationZero));
    }
    Ok(Duration::from_millis(millis))
}

fn millis_per_unit(unit: &str) -> AppResult<u64> {
    match unit {
        "ms" => Ok(1),
        "" | "s" => Ok(1_000),
        "m" => Ok(60_000),
        "h" => Ok(3_600_000),
        other => Err(AppError::validation(ValidationError::InvalidDurationUnit {
            unit: other.to_owned(),
        })),
    }
}
