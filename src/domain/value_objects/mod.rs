//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod config_warning;
mod deploy_target;
mod runtime;
mod stage;

pub use config_warning::ConfigWarning;
pub use deploy_target::{DeploymentTarget, DEFAULT_APP_NAME, DEFAULT_RESOURCE_GROUP};
pub use runtime::RuntimeIdentifier;
pub use stage::{DeployState, Stage};
