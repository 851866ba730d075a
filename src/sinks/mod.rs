//! Rendering finished result sets to the console and to append-only logs.
mod format;
mod path;
mod writers;


pub use format::render_blocks;
pub use path::resolve_output_path;
pub use writers::{OutputPlan, OutputSummary, emit, write_console, write_file};
