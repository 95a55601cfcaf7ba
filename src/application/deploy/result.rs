//! Deploy Outcome
//!
//! Terminal result of a deploy run and the exit status it maps to.

use std::time::Duration;

use crate::domain::value_objects::{DeployState, DeploymentTarget};
use crate::error::DeployError;

/// Result of a deploy run
#[derive(Debug)]
pub struct DeployOutcome {
    pub target: DeploymentTarget,
    /// Terminal state; `Start` for a dry run, which executes nothing
    pub state: DeployState,
    /// The failing stage's error, if any stage failed
    pub error: Option<DeployError>,
    pub duration: Duration,
    pub dry_run: bool,
}

impl DeployOutcome {
    /// True when the code reached the platform.
    ///
    /// A failed restart still counts: the publish already made the code live.
    pub fn is_success(&self) -> bool {
        match self.error {
            Some(ref err) => !err.is_fatal(),
            None => true,
        }
    }

    pub fn restarted(&self) -> bool {
        self.state == DeployState::Restarted
    }

    /// Process exit status for this outcome.
    ///
    /// Runtime and publish failures force 1. A restart failure is reported
    /// as a warning and leaves the status at 0.
    pub fn exit_code(&self) -> u8 {
        if self.is_success() {
            0
        } else {
            1
        }
    }

    pub fn duration_ms(&self) -> u64 {
        u64::try_from(self.duration.as_millis()).unwrap_or(u64::MAX)
    }
}
