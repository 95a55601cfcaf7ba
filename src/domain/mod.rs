//! Domain Layer
//!
//! Pure deployment concepts without I/O dependencies.
//!
//! ## Structure
//!
//! - `value_objects/` - Immutable value types (DeploymentTarget, RuntimeIdentifier, Stage)
//! - `services/` - Domain services (CommandPlan)
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never spawns processes or touches the file system
//! 2. **Ports & Adapters** - All platform calls go through trait-defined ports

pub mod ports;
pub mod services;
pub mod value_objects;
