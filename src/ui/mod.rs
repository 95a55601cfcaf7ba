//! Terminal UI
//!
//! Design tokens, capability detection and the renderers behind the
//! console event sink.

pub mod context;
pub mod output;
pub mod primitives;
pub mod terminal;
pub mod theme;
pub mod views;

pub use context::UiContext;
