//! Batch job files.
mod loader;
pub mod types;


pub use loader::load_jobs;
