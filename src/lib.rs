//! funcship - runtime-pinning publisher for Python Azure Function apps
//!
//! A deploy runs three gated stages against the platform CLIs: set the app's
//! runtime version, publish the working directory, restart the app. The
//! first two stages abort the run on failure; a failed restart only warns.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;
pub mod ui;

// Re-exports for convenience
pub use application::{DeployOptions, DeployOutcome, DeployUseCase};
pub use config::Config;
pub use domain::value_objects::{DeployState, DeploymentTarget, RuntimeIdentifier, Stage};
pub use error::{ConfigError, DeployError};
