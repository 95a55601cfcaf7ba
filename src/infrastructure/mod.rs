//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `platform/` - Process-backed `PlatformCli`
//! - `events/` - Event sinks (console, JSON)

pub mod events;
pub mod platform;

// Re-export for convenience
pub use events::{ConsoleEventSink, JsonEventSink};
pub use platform::{ChildOutput, ProcessPlatform};
