//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating the deploy use case and event sink for a run
//!
//! ## Usage
//!
//! ```ignore
//! use funcship::presentation::factory;
//!
//! let use_case = factory::create_deploy_use_case(&config, &ui);
//! let sink = factory::create_event_sink(&ui);
//! let outcome = use_case.execute(&target, &options, sink.as_ref());
//! ```

pub mod cli;
pub mod factory;

pub use cli::{Cli, ColorWhen};
pub use factory::{create_deploy_use_case, create_event_sink};
