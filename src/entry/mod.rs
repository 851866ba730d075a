mod plan;

use clap::{CommandFactory, FromArgMatches};

use crate::args::Cli;
use crate::error::AppResult;
use plan::{RunPlan, build_plan, execute_plan};

/// Parses the command line and runs the selected command to completion.
///
/// # Errors
///
/// Returns an error when inputs cannot be read or validated, or when results
/// cannot be written. Failed requests are reported as outcomes instead.
pub fn run() -> AppResult<()> {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches)?;

    crate::system::logger::init_logging(cli.verbose, cli.no_color);

    let plan = build_plan(cli);
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(run_async(plan))
}

async fn run_async(plan: RunPlan) -> AppResult<()> {
    execute_plan(plan).await
}
