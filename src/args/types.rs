use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Where a finished result set is rendered.
#[derive(Debug, Clone, Copy, Default, ValueEnum, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    #[default]
    Console,
    File,
    Both,
}

impl OutputMode {
    #[must_use]
    pub const fn writes_file(self) -> bool {
        matches!(self, OutputMode::File | OutputMode::Both)
    }

    #[must_use]
    pub const fn writes_console(self) -> bool {
        matches!(self, OutputMode::Console | OutputMode::Both)
    }
}
