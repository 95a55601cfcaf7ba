//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod deploy_events;
pub mod platform_cli;

pub use deploy_events::{DeployEvent, DeployEventSink, NoopEventSink};
pub use platform_cli::{PlatformCli, PlatformCommand, PlatformError};
