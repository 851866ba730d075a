use thiserror::Error;

/// Failures that stop a single unit before it can put a request on the wire.
#[derive(Debug, Error)]
pub enum HttpError {
    #[error("Invalid HTTP method '{method}': {source}")]
    InvalidMethod {
        method: String,
        #[source]
        source: http::method::InvalidMethod,
    },
    #[error("Invalid URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("Failed to build HTTP client: {source}")]
    BuildClientFailed {
        #[source]
        source: reqwest::Error,
    },
    #[error("Failed to build request: {source}")]
    BuildRequestFailed {
        #[source]
        source: reqwest::Error,
    },
    #[error("Outcome channel closed before unit {unit} could report.")]
    OutcomeChannelClosed { unit: usize },
    #[error("Request unit aborted: {source}")]
    UnitAborted {
        #[source]
        source: tokio::task::JoinError,
    },
}
