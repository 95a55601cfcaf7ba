//! Use Case Factory
//!
//! Creates the deploy use case and event sink with infrastructure wired up.
//! This is the dependency injection point for the application.

use crate::application::DeployUseCase;
use crate::config::Config;
use crate::domain::ports::DeployEventSink;
use crate::infrastructure::{ChildOutput, ConsoleEventSink, JsonEventSink, ProcessPlatform};
use crate::ui::UiContext;

/// Type alias for the concrete DeployUseCase
pub type ConcreteDeployUseCase = DeployUseCase<ProcessPlatform>;

/// Create a deploy use case that spawns the configured platform CLIs
///
/// In JSON mode the children's stdout is moved to stderr so stdout carries
/// only NDJSON.
pub fn create_deploy_use_case(config: &Config, ui: &UiContext) -> ConcreteDeployUseCase {
    let output = if ui.json {
        ChildOutput::ToStderr
    } else {
        ChildOutput::Inherit
    };
    DeployUseCase::new(ProcessPlatform::new(output), config.command_plan())
}

/// Create the event sink matching the output mode
pub fn create_event_sink(ui: &UiContext) -> Box<dyn DeployEventSink> {
    if ui.json {
        Box::new(JsonEventSink::stdout())
    } else {
        Box::new(ConsoleEventSink::stdout(ui))
    }
}
