//! Command Plan
//!
//! Maps each deploy stage to the exact platform command it runs.
//!
//! | Stage | Command |
//! |-------|---------|
//! | ConfigureRuntime | `az functionapp config set --name <app> --resource-group <rg> --linux-fx-version PYTHON|3.11` |
//! | Publish | `func azure functionapp publish <app> --python` |
//! | Restart | `az functionapp restart --name <app> --resource-group <rg>` |

use crate::domain::ports::PlatformCommand;
use crate::domain::value_objects::{DeploymentTarget, RuntimeIdentifier, Stage};

/// Azure CLI program name used when no override is configured.
pub const DEFAULT_AZ_PROGRAM: &str = "az";

/// Azure Functions Core Tools program name used when no override is configured.
pub const DEFAULT_FUNC_PROGRAM: &str = "func";

/// Builds platform commands for a deploy run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandPlan {
    az_program: String,
    func_program: String,
    runtime: RuntimeIdentifier,
}

impl CommandPlan {
    pub fn new(az_program: impl Into<String>, func_program: impl Into<String>) -> Self {
        Self {
            az_program: az_program.into(),
            func_program: func_program.into(),
            runtime: RuntimeIdentifier::PYTHON,
        }
    }

    pub fn runtime(&self) -> RuntimeIdentifier {
        self.runtime
    }

    pub fn command_for(&self, stage: Stage, target: &DeploymentTarget) -> PlatformCommand {
        match stage {
            Stage::ConfigureRuntime => self.configure_runtime(target),
            Stage::Publish => self.publish(target),
            Stage::Restart => self.restart(target),
        }
    }

    pub fn configure_runtime(&self, target: &DeploymentTarget) -> PlatformCommand {
        PlatformCommand::new(&self.az_program)
            .args(["functionapp", "config", "set"])
            .args(app_scope(target))
            .arg("--linux-fx-version")
            .arg(self.runtime.linux_fx_version())
    }

    /// Publishes the current working directory; no packaging happens here.
    pub fn publish(&self, target: &DeploymentTarget) -> PlatformCommand {
        PlatformCommand::new(&self.func_program)
            .args(["azure", "functionapp", "publish"])
            .arg(&target.app_name)
            .arg(self.runtime.worker_flag())
    }

    pub fn restart(&self, target: &DeploymentTarget) -> PlatformCommand {
        PlatformCommand::new(&self.az_program)
            .args(["functionapp", "restart"])
            .args(app_scope(target))
    }
}

impl Default for CommandPlan {
    fn default() -> Self {
        Self::new(DEFAULT_AZ_PROGRAM, DEFAULT_FUNC_PROGRAM)
    }
}

fn app_scope(target: &DeploymentTarget) -> [String; 4] {
    [
        "--name".to_string(),
        target.app_name.clone(),
        "--resource-group".to_string(),
        target.resource_group.clone(),
    ]
}
