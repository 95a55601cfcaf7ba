//! Configuration module for funcship
//!
//! Configuration hierarchy:
//! 1. CLI positionals and flags (highest priority)
//! 2. Environment variables (FUNCSHIP_*)
//! 3. Project config (./funcship.toml)
//! 4. User config (<config dir>/funcship/config.toml)
//! 5. Built-in defaults (lowest priority)
//!
//! Only the first config file found is read; files are not merged.

mod env_validator;
mod loader;
mod types;

pub use crate::domain::value_objects::ConfigWarning;

pub use env_validator::{levenshtein, EnvVarValidator};
pub use loader::{
    apply_env_overrides, discover, load_with_warnings, user_config_path, LoadedConfig,
    PROJECT_CONFIG_FILE,
};
pub use types::{ColorMode, Config, DeployConfig, OutputConfig, ToolsConfig};
