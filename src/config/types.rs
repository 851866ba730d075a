use serde::{Deserialize, Serialize};

/// One entry of a JSON job file. Field names match the single-request flags.
///
/// Every field is optional in the file. Empty strings mean "not set".
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct JobSpec {
    pub description: String,
    pub url: String,
    pub method: String,
    /// Defaults to 1 when absent.
    pub amount: Option<usize>,
    pub body: String,
    pub headers: String,
    pub bfile: String,
    pub hfile: String,
    pub output: String,
    /// `console`, `file` or `both`; empty means `console`.
    pub mode: String,
    /// Per-request timeout such as `"5s"`; unbounded when absent.
    pub timeout: Option<String>,
}
