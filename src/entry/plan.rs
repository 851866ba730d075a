use tracing::debug;

use crate::adapters::cli::{to_load_command, to_request_command};
use crate::application::commands::{LoadCommand, RequestCommand};
use crate::application::{run_load, run_request};
use crate::args::{Cli, Command};
use crate::error::AppResult;

pub(super) enum RunPlan {
    Request(RequestCommand),
    Load(LoadCommand),
}

#[must_use]
pub(super) fn build_plan(cli: Cli) -> RunPlan {
    match cli.command {
        Command::Request(args) => RunPlan::Request(to_request_command(args)),
        Command::Load(args) => RunPlan::Load(to_load_command(args)),
    }
}

pub(super) async fn execute_plan(plan: RunPlan) -> AppResult<()> {
    match plan {
        RunPlan::Request(command) => {
            let summary = run_request(command).await?;
            debug!(
                "Request finished: {} outcome(s), {} build failure(s), {} console byte(s)",
                summary.outcomes, summary.build_failures, summary.output.console_bytes
            );
            Ok(())
        }
        RunPlan::Load(command) => {
            let summary = run_load(&command).await?;
            debug!(
                "Load finished: {} succeeded, {} failed",
                summary.succeeded, summary.failed
            );
            Ok(())
        }
    }
}
