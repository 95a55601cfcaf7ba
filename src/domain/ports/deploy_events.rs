//! Deploy Event Port
//!
//! Provides an observable interface for deploy runs.
//! Enables console progress lines, JSON event streams, and test recording.

use crate::domain::value_objects::{DeployState, DeploymentTarget, RuntimeIdentifier, Stage};

/// Event emitted during a deploy run
#[derive(Debug, Clone, PartialEq)]
pub enum DeployEvent {
    /// Run started
    Started {
        target: DeploymentTarget,
        runtime: RuntimeIdentifier,
        dry_run: bool,
    },

    /// Dry run: the command a stage would execute
    Planned { stage: Stage, command: String },

    /// Stage command is about to run
    StageStarted { stage: Stage, command: String },

    /// Stage command exited successfully
    StageSucceeded { stage: Stage },

    /// Stage command failed; `fatal` is false for the advisory restart stage
    StageFailed {
        stage: Stage,
        fatal: bool,
        exit_code: Option<i32>,
        message: String,
    },

    /// Run reached a terminal state
    Completed { state: DeployState, duration_ms: u64 },
}

/// Trait for receiving deploy events
///
/// Implementations:
/// - ConsoleEventSink: glyph-prefixed status lines
/// - JsonEventSink: NDJSON event stream for CI
/// - NoopEventSink: Silent operation
pub trait DeployEventSink: Send + Sync {
    /// Handle a deploy event
    fn on_event(&self, event: DeployEvent);
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl DeployEventSink for NoopEventSink {
    fn on_event(&self, _event: DeployEvent) {}
}
