use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("The header '{segment}' is improperly formatted. Expected 'Key:Value'.")]
    InvalidHeaderFormat { segment: String },
    #[error("Invalid headers: {source}")]
    InvalidHeaders {
        #[source]
        source: Box<ValidationError>,
    },
    #[error("Missing URL (set --url or provide it in the job).")]
    MissingUrl,
    #[error("Duration must not be empty.")]
    DurationEmpty,
    #[error("Invalid duration '{value}'.")]
    InvalidDurationFormat { value: String },
    #[error("Invalid duration '{value}': {source}")]
    InvalidDurationNumber {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },
    #[error("Duration overflow.")]
    DurationOverflow,
    #[error("Invalid duration unit '{unit}'.")]
    InvalidDurationUnit { unit: String },
    #[error("Duration must be > 0.")]
    DurationZero,
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
