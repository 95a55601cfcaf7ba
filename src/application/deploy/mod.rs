//! Deploy Module
//!
//! Runs the three gated deploy stages against the hosting platform.
//!
//! ## Structure
//!
//! - `options` - Run options (`DeployOptions`)
//! - `result` - Terminal outcome and exit code policy (`DeployOutcome`)
//! - `use_case` - The gated stage runner (`DeployUseCase`)
//!
//! ## Usage
//!
//! ```ignore
//! use funcship::application::deploy::{DeployOptions, DeployUseCase};
//!
//! let use_case = DeployUseCase::new(platform, CommandPlan::default());
//! let outcome = use_case.execute(&target, &DeployOptions::default(), &sink);
//! std::process::exit(outcome.exit_code());
//! ```

mod options;
mod result;
mod use_case;

pub use options::DeployOptions;
pub use result::DeployOutcome;
pub use use_case::DeployUseCase;
