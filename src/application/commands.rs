use std::path::{Path, PathBuf};

use crate::domain::RequestInput;
use crate::sinks::OutputPlan;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RequestCommand {
    input: RequestInput,
    output: OutputPlan,
}

impl RequestCommand {
    #[must_use]
    pub(crate) const fn new(input: RequestInput, output: OutputPlan) -> Self {
        Self { input, output }
    }

    #[must_use]
    pub(crate) const fn input(&self) -> &RequestInput {
        &self.input
    }

    #[must_use]
    pub(crate) const fn output(&self) -> &OutputPlan {
        &self.output
    }

    #[must_use]
    pub(crate) fn into_parts(self) -> (RequestInput, OutputPlan) {
        (self.input, self.output)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct LoadCommand {
    path: PathBuf,
}

impl LoadCommand {
    #[must_use]
    pub(crate) const fn new(path: PathBuf) -> Self {
        Self { path }
    }

    #[must_use]
    pub(crate) fn path(&self) -> &Path {
        &self.path
    }
}
