//! Deploy stages and the linear state machine they drive.

use serde::Serialize;
use std::fmt;

/// One step of the deploy pipeline, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    ConfigureRuntime,
    Publish,
    Restart,
}

impl Stage {
    /// All stages in the order they run.
    pub const ALL: [Stage; 3] = [Stage::ConfigureRuntime, Stage::Publish, Stage::Restart];

    /// Whether a failure of this stage aborts the deploy with exit status 1.
    ///
    /// Restart is advisory: the code is already live once publish succeeds.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, Stage::Restart)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::ConfigureRuntime => "configure_runtime",
            Stage::Publish => "publish",
            Stage::Restart => "restart",
        }
    }

    /// Human label used while the stage is running.
    pub fn label(&self) -> &'static str {
        match self {
            Stage::ConfigureRuntime => "Configuring runtime",
            Stage::Publish => "Publishing code",
            Stage::Restart => "Restarting app",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a deploy run currently stands.
///
/// `Start -> RuntimeSet -> Published -> Restarted`, with a failure terminal
/// per stage. There are no transitions back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DeployState {
    Start,
    RuntimeSet,
    Published,
    Restarted,
    RuntimeFailed,
    PublishFailed,
    RestartFailed,
}

impl DeployState {
    /// The stage that runs next, or `None` once terminal.
    pub fn next_stage(&self) -> Option<Stage> {
        match self {
            DeployState::Start => Some(Stage::ConfigureRuntime),
            DeployState::RuntimeSet => Some(Stage::Publish),
            DeployState::Published => Some(Stage::Restart),
            _ => None,
        }
    }

    /// Transition after `stage` finished with `succeeded`.
    ///
    /// Returns `self` unchanged if `stage` is not the one this state expects.
    pub fn advance(self, stage: Stage, succeeded: bool) -> DeployState {
        match (self, stage, succeeded) {
            (DeployState::Start, Stage::ConfigureRuntime, true) => DeployState::RuntimeSet,
            (DeployState::Start, Stage::ConfigureRuntime, false) => DeployState::RuntimeFailed,
            (DeployState::RuntimeSet, Stage::Publish, true) => DeployState::Published,
            (DeployState::RuntimeSet, Stage::Publish, false) => DeployState::PublishFailed,
            (DeployState::Published, Stage::Restart, true) => DeployState::Restarted,
            (DeployState::Published, Stage::Restart, false) => DeployState::RestartFailed,
            (state, _, _) => state,
        }
    }

    /// Terminal failure that aborts the run with exit status 1.
    pub fn is_fatal_failure(&self) -> bool {
        matches!(self, DeployState::RuntimeFailed | DeployState::PublishFailed)
    }

    pub fn is_terminal(&self) -> bool {
        self.next_stage().is_none()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DeployState::Start => "start",
            DeployState::RuntimeSet => "runtime_set",
            DeployState::Published => "published",
            DeployState::Restarted => "restarted",
            DeployState::RuntimeFailed => "runtime_failed",
            DeployState::PublishFailed => "publish_failed",
            DeployState::RestartFailed => "restart_failed",
        }
    }
}
