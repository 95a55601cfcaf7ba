//! Domain Services
//!
//! Pure business logic services that operate on domain values.
//! These services have no I/O dependencies and are easily testable.

mod command_plan;

pub use command_plan::{CommandPlan, DEFAULT_AZ_PROGRAM, DEFAULT_FUNC_PROGRAM};
