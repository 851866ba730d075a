use std::fmt::Write as _;

use crate::domain::{RequestOutcome, ResultSet};
use crate::error::SinkError;

pub(super) fn write_block(output: &mut String, outcome: &RequestOutcome) -> Result<(), SinkError> {
    write!(
        output,
        "new_request\nStatus_Code: {}\nBody: {}\n\n",
        outcome.status_code(),
        outcome.body()
    )
    .map_err(|err| SinkError::RenderBlock { source: err })
}

/// Renders every outcome as a result block, in result set order.
///
/// # Errors
///
/// Returns an error if a block cannot be formatted.
pub fn render_blocks(results: &ResultSet) -> Result<String, SinkError> {
    let mut output = String::new();
    for outcome in results {
        write_block(&mut output, outcome)?;
    }
    Ok(output)
}
