//! Concurrent request dispatch and result collection.
mod collector;
mod dispatch;
mod worker;

#[cfg(test)]
pub(crate) mod test_support;

pub use collector::BatchReport;
pub use dispatch::run_batch;
