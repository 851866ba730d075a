use tracing::debug;

use crate::domain::RequestDescriptor;
use crate::error::{AppError, AppResult};
use crate::http::run_batch;
use crate::sinks::{OutputSummary, emit};

use super::commands::RequestCommand;

#[derive(Debug, Default)]
pub(crate) struct RequestRunSummary {
    pub(crate) outcomes: usize,
    pub(crate) build_failures: usize,
    pub(crate) output: OutputSummary,
}

/// Validates the command, runs the batch to completion and renders the
/// collected outcomes.
///
/// # Errors
///
/// Returns an error when the inputs are invalid or the outcomes cannot be
/// written. Individual request failures are not errors.
pub(crate) async fn run_request(command: RequestCommand) -> AppResult<RequestRunSummary> {
    debug!(
        "Request to '{}' renders to {:?}",
        command.input().url,
        command.output().mode
    );
    let (input, output) = command.into_parts();
    let descriptor = RequestDescriptor::from_input(input)?;

    let report = run_batch(descriptor).await;
    let (results, build_failures) = report.into_parts();

    let summary = emit(&output, &results).map_err(AppError::sink)?;
    debug!(
        "Rendered {} outcome(s); console bytes: {}",
        results.len(),
        summary.console_bytes
    );

    Ok(RequestRunSummary {
        outcomes: results.len(),
        build_failures: build_failures.len(),
        output: summary,
    })
}
