use tracing::info;

use crate::adapters::cli::job_to_request_command;
use crate::config::load_jobs;
use crate::config::types::JobSpec;
use crate::error::AppResult;

use super::commands::LoadCommand;
use super::request_run::run_request;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct BatchRunSummary {
    pub(crate) succeeded: usize,
    pub(crate) failed: usize,
}

/// Loads the job file and runs every job in file order.
///
/// # Errors
///
/// Returns an error only when the job file cannot be read or parsed. Failing
/// jobs are reported and skipped.
pub(crate) async fn run_load(command: &LoadCommand) -> AppResult<BatchRunSummary> {
    let jobs = load_jobs(command.path())?;
    Ok(run_jobs(&jobs).await)
}

/// Runs jobs sequentially; each job's batch finishes before the next starts.
pub(crate) async fn run_jobs(jobs: &[JobSpec]) -> BatchRunSummary {
    let mut summary = BatchRunSummary::default();

    for job in jobs {
        info!("Running request: {}", job.description);
        match run_job(job).await {
            Ok(()) => summary.succeeded = summary.succeeded.saturating_add(1),
            Err(err) => {
                eprintln!("Error running request '{}': {}", job.description, err);
                summary.failed = summary.failed.saturating_add(1);
            }
        }
    }

    info!(
        "Finished {} job(s): {} succeeded, {} failed",
        jobs.len(),
        summary.succeeded,
        summary.failed
    );
    summary
}

async fn run_job(job: &JobSpec) -> AppResult<()> {
    let command = job_to_request_command(job)?;
    run_request(command).await?;
    Ok(())
}
