//! Use cases: one request batch, or a file of batches run one after another.
mod batch_run;
pub(crate) mod commands;
mod request_run;


pub(crate) use batch_run::run_load;
pub(crate) use request_run::run_request;
