//! Runtime identifier value object.

use std::fmt;

/// Interpreter family and version the function app runs on.
///
/// Fixed for every deploy: no CLI flag, env var or config key changes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuntimeIdentifier {
    family: &'static str,
    version: &'static str,
}

impl RuntimeIdentifier {
    pub const PYTHON: RuntimeIdentifier = RuntimeIdentifier {
        family: "python",
        version: "3.11",
    };

    /// Platform form used for the linux framework setting (`PYTHON|3.11`).
    pub fn linux_fx_version(&self) -> String {
        format!("{}|{}", self.family.to_uppercase(), self.version)
    }

    /// Worker runtime flag understood by the publish tool (`--python`).
    pub fn worker_flag(&self) -> String {
        format!("--{}", self.family)
    }
}

impl Default for RuntimeIdentifier {
    fn default() -> Self {
        Self::PYTHON
    }
}

impl fmt::Display for RuntimeIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.linux_fx_version())
    }
}
