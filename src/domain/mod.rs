//! Values that flow through one batch: the descriptor that goes in and the
//! outcomes that come out.
mod descriptor;
mod outcome;


pub use descriptor::{RequestDescriptor, RequestInput};
pub use outcome::{RequestOutcome, ResultSet, TRANSPORT_FAILURE_STATUS};
