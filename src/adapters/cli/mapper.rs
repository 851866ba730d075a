use std::path::PathBuf;

use clap::ValueEnum;

use crate::application::commands::{LoadCommand, RequestCommand};
use crate::args::parsers::parse_duration_arg;
use crate::args::{LoadArgs, OutputMode, RequestArgs};
use crate::config::types::JobSpec;
use crate::domain::RequestInput;
use crate::error::{AppError, AppResult, ConfigError};
use crate::sinks::OutputPlan;

const DEFAULT_JOB_AMOUNT: usize = 1;

#[must_use]
pub(crate) fn to_request_command(args: RequestArgs) -> RequestCommand {
    let input = RequestInput {
        method: args.method,
        url: args.url,
        amount: args.amount,
        body: args.body,
        body_file: optional_path(args.body_file.as_deref()),
        headers: args.headers,
        header_file: optional_path(args.header_file.as_deref()),
        timeout: args.timeout,
    };
    let output = OutputPlan {
        mode: args.mode,
        path: args.output,
    };
    RequestCommand::new(input, output)
}

#[must_use]
pub(crate) fn to_load_command(args: LoadArgs) -> LoadCommand {
    LoadCommand::new(PathBuf::from(args.file))
}

/// Maps one job file entry onto the same command a `request` invocation
/// would produce.
///
/// # Errors
///
/// Returns an error when the job's mode or timeout cannot be parsed.
pub(crate) fn job_to_request_command(job: &JobSpec) -> AppResult<RequestCommand> {
    let mode = map_job_mode(&job.mode)?;
    let timeout = match job.timeout.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(value) => Some(parse_duration_arg(value).map_err(|err| {
            AppError::config(ConfigError::InvalidJobTimeout {
                value: value.to_owned(),
                source: Box::new(err),
            })
        })?),
    };

    let input = RequestInput {
        method: job.method.clone(),
        url: job.url.clone(),
        amount: job.amount.unwrap_or(DEFAULT_JOB_AMOUNT),
        body: job.body.clone(),
        body_file: optional_path(Some(&job.bfile)),
        headers: job.headers.clone(),
        header_file: optional_path(Some(&job.hfile)),
        timeout,
    };
    let output = OutputPlan {
        mode,
        path: job.output.clone(),
    };
    Ok(RequestCommand::new(input, output))
}

fn map_job_mode(value: &str) -> AppResult<OutputMode> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(OutputMode::Console);
    }
    OutputMode::from_str(trimmed, true).map_err(|_err| {
        AppError::config(ConfigError::InvalidJobMode {
            value: value.to_owned(),
        })
    })
}

fn optional_path(value: Option<&str>) -> Option<PathBuf> {
    value
        .filter(|path| !path.trim().is_empty())
        .map(PathBuf::from)
}
