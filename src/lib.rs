//! Core library for the `netmeg` CLI.
//!
//! This crate provides the building blocks used by the binary: CLI argument
//! types, job file parsing, the request descriptor, concurrent dispatch and
//! result collection, and output sinks. The primary user-facing interface is
//! the `netmeg` command-line application, started through [`run`].
mod adapters;
mod application;
pub mod args;
pub mod config;
pub mod domain;
mod entry;
pub mod error;
pub mod http;
pub mod sinks;
mod system;

pub use entry::run;
