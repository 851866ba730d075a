use clap::{Args, Parser, Subcommand};
use std::time::Duration;

use super::parsers::parse_duration_arg;
use super::types::OutputMode;

#[derive(Debug, Parser, Clone)]
#[clap(
    version,
    about = "Fire N concurrent HTTP requests at a URL and collect every status code and response body."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose logging (sets log level to debug unless overridden by NETMEG_LOG/RUST_LOG)
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Disable colored log output
    #[arg(long = "no-color", global = true)]
    pub no_color: bool,
}

/// The command table. Each variant is one independent command definition.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Send an HTTP request to the specified URL.
    Request(RequestArgs),
    /// Execute request jobs stored in a JSON file.
    Load(LoadArgs),
}

#[derive(Debug, Args, Clone)]
pub struct RequestArgs {
    /// HTTP method to use for the request
    #[arg(long, short = 'm', default_value = "get")]
    pub method: String,

    /// URL to send the request to
    #[arg(long, short = 'u', default_value = "")]
    pub url: String,

    /// Amount of requests to send in parallel
    #[arg(long, short = 'n', default_value_t = 1)]
    pub amount: usize,

    /// Path to file for results ({timestamp} is replaced with YYYYMMDDHHMMSS)
    #[arg(long, short = 'o', default_value = "")]
    pub output: String,

    /// Header list formatted as {key}:{value}, separated by commas
    #[arg(long, short = 'H', default_value = "")]
    pub headers: String,

    /// Request body
    #[arg(long, short = 'b', default_value = "")]
    pub body: String,

    /// File containing the request body (overrides --body and -b)
    #[arg(long = "bfile")]
    pub body_file: Option<String>,

    /// File containing headers (overrides --headers and -H)
    #[arg(long = "hfile")]
    pub header_file: Option<String>,

    /// Output mode for results
    #[arg(long, value_enum, default_value_t = OutputMode::Console)]
    pub mode: OutputMode,

    /// Per-request timeout (supports ms/s/m/h); unbounded when unset
    #[arg(long, value_parser = parse_duration_arg)]
    pub timeout: Option<Duration>,
}

#[derive(Debug, Args, Clone)]
pub struct LoadArgs {
    /// JSON file containing request jobs
    #[arg(long, short = 'f')]
    pub file: String,
}
