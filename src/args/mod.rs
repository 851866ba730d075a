//! CLI argument types and parsing helpers.
mod cli;
pub(crate) mod parsers;
mod types;

#[cfg(test)]
mod test_support;

pub use cli::{Cli, Command, LoadArgs, RequestArgs};
pub use parsers::parse_header_spec;
pub use types::OutputMode;
