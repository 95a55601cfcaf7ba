//! Event Sink Implementations
//!
//! Provides concrete implementations of DeployEventSink:
//! - ConsoleEventSink: glyph-prefixed status lines for humans
//! - JsonEventSink: NDJSON output for CI/automation

mod console;
mod json;

pub use console::ConsoleEventSink;
pub use json::JsonEventSink;
