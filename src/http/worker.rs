use std::sync::Arc;

use futures_util::StreamExt;
use reqwest::{Client, Method, Request, Url};
use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::domain::{RequestDescriptor, RequestOutcome};
use crate::error::HttpError;

/// One unit of work: a fresh client, one request, one outcome.
///
/// Transport failures become outcomes. Only failures that happen before the
/// request exists are returned as errors.
pub(super) async fn run_unit(
    unit: usize,
    descriptor: Arc<RequestDescriptor>,
    outcome_tx: mpsc::Sender<RequestOutcome>,
) -> Result<(), HttpError> {
    let client = build_client(&descriptor)?;
    let request = build_request(&client, &descriptor)?;
    let outcome = execute_request(&client, request).await;
    debug!(
        unit,
        status = outcome.status_code(),
        "Request unit finished"
    );
    outcome_tx
        .send(outcome)
        .await
        .map_err(|_closed| HttpError::OutcomeChannelClosed { unit })
}

fn build_client(descriptor: &RequestDescriptor) -> Result<Client, HttpError> {
    let mut builder = Client::builder();
    if let Some(timeout) = descriptor.timeout() {
        builder = builder.timeout(timeout);
    }
    builder
        .build()
        .map_err(|err| HttpError::BuildClientFailed { source: err })
}

pub(super) fn build_request(
    client: &Client,
    descriptor: &RequestDescriptor,
) -> Result<Request, HttpError> {
    let method =
        Method::from_bytes(descriptor.method().as_bytes()).map_err(|err| {
            HttpError::InvalidMethod {
                method: descriptor.method().to_owned(),
                source: err,
            }
        })?;
    let url = Url::parse(descriptor.url()).map_err(|err| HttpError::InvalidUrl {
        url: descriptor.url().to_owned(),
        source: err,
    })?;

    let mut request_builder = client.request(method, url);
    for (key, value) in descriptor.headers() {
        request_builder = request_builder.header(key.as_str(), value.as_str());
    }
    if !descriptor.body().is_empty() {
        request_builder = request_builder.body(descriptor.body().to_vec());
    }

    request_builder
        .build()
        .map_err(|err| HttpError::BuildRequestFailed { source: err })
}

pub(super) async fn execute_request(client: &Client, request: Request) -> RequestOutcome {
    match client.execute(request).await {
        Ok(response) => {
            let status = response.status().as_u16();
            let body = read_response_body(response).await;
            RequestOutcome::response(status, String::from_utf8_lossy(&body).into_owned())
        }
        Err(err) => {
            let description = describe_error(&err);
            debug!("Request failed: {}", description);
            RequestOutcome::transport_failure(description)
        }
    }
}

/// Reads the whole body. A read error keeps whatever arrived before it.
async fn read_response_body(response: reqwest::Response) -> Vec<u8> {
    let mut stream = response.bytes_stream();
    let mut body = Vec::new();
    while let Some(chunk) = stream.next().await {
        match chunk {
            Ok(bytes) => body.extend_from_slice(&bytes),
            Err(err) => {
                warn!("Failed to read response body: {}", describe_error(&err));
                break;
            }
        }
    }
    body
}

/// Joins an error with its source chain, skipping causes already included
/// in the text.
pub(super) fn describe_error(err: &(dyn std::error::Error + 'static)) -> String {
    let mut description = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !description.contains(&text) {
            description.push_str(": ");
            description.push_str(&text);
        }
        source = cause.source();
    }
    description
}
