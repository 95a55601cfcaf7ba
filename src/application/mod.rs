//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (value objects, services, ports)
//! - Does NOT spawn processes itself (that goes through `PlatformCli`)
//!
//! ## Use Cases
//!
//! - `DeployUseCase` - Configure runtime, publish, restart

pub mod deploy;

pub use deploy::{DeployOptions, DeployOutcome, DeployUseCase};
