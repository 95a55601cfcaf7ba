//! JSON Event Sink
//!
//! Outputs deploy events as NDJSON for CI/automation consumption.

use crate::domain::ports::{DeployEvent, DeployEventSink};
use crate::domain::value_objects::DeployState;
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    /// Mutex to ensure thread-safe writes
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self::with_writer(io::stdout())
    }

    /// Create a JSON event sink writing to a custom writer (for testing)
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

impl DeployEventSink for JsonEventSink {
    fn on_event(&self, event: DeployEvent) {
        let json = match event {
            DeployEvent::Started {
                target,
                runtime,
                dry_run,
            } => serde_json::json!({
                "event": "start",
                "command": "deploy",
                "version": env!("CARGO_PKG_VERSION"),
                "app_name": target.app_name,
                "resource_group": target.resource_group,
                "runtime": runtime.linux_fx_version(),
                "dry_run": dry_run,
            }),

            DeployEvent::Planned { stage, command } => serde_json::json!({
                "event": "planned",
                "command": "deploy",
                "stage": stage,
                "invocation": command,
            }),

            DeployEvent::StageStarted { stage, command } => serde_json::json!({
                "event": "stage_start",
                "command": "deploy",
                "stage": stage,
                "invocation": command,
            }),

            DeployEvent::StageSucceeded { stage } => serde_json::json!({
                "event": "stage_ok",
                "command": "deploy",
                "stage": stage,
            }),

            DeployEvent::StageFailed {
                stage,
                fatal,
                exit_code,
                message,
            } => serde_json::json!({
                "event": "stage_failed",
                "command": "deploy",
                "stage": stage,
                "fatal": fatal,
                "exit_code": exit_code,
                "message": message,
            }),

            DeployEvent::Completed { state, duration_ms } => {
                let success = !state.is_fatal_failure();
                let restarted = state == DeployState::Restarted;
                serde_json::json!({
                    "event": "complete",
                    "command": "deploy",
                    "success": success,
                    "outcome": state,
                    "restarted": restarted,
                    "duration_ms": duration_ms,
                })
            }
        };
        self.write_event(json);
    }
}
