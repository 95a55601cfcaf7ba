//! Deploy Options

/// Options for the deploy use case
#[derive(Debug, Clone, Default)]
pub struct DeployOptions {
    /// Report the commands each stage would run without running them
    pub dry_run: bool,
}

impl DeployOptions {
    pub fn dry_run() -> Self {
        Self { dry_run: true }
    }
}
