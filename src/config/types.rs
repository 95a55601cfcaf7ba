//! Configuration types

use std::path::Path;

use serde::Deserialize;

use crate::domain::services::{CommandPlan, DEFAULT_AZ_PROGRAM, DEFAULT_FUNC_PROGRAM};
use crate::domain::value_objects::{DeploymentTarget, DEFAULT_APP_NAME, DEFAULT_RESOURCE_GROUP};
use crate::error::ConfigResult;

use super::loader;
use super::ConfigWarning;

/// Root configuration (`funcship.toml`)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub deploy: DeployConfig,

    #[serde(default)]
    pub tools: ToolsConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

/// Default deployment target, used when positionals are absent
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DeployConfig {
    #[serde(default = "default_app_name")]
    pub app_name: String,

    #[serde(default = "default_resource_group")]
    pub resource_group: String,
}

impl Default for DeployConfig {
    fn default() -> Self {
        Self {
            app_name: default_app_name(),
            resource_group: default_resource_group(),
        }
    }
}

fn default_app_name() -> String {
    DEFAULT_APP_NAME.to_string()
}

fn default_resource_group() -> String {
    DEFAULT_RESOURCE_GROUP.to_string()
}

/// Platform CLI programs (name on PATH or absolute path)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ToolsConfig {
    #[serde(default = "default_az")]
    pub az: String,

    #[serde(default = "default_func")]
    pub func: String,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            az: default_az(),
            func: default_func(),
        }
    }
}

fn default_az() -> String {
    DEFAULT_AZ_PROGRAM.to_string()
}

fn default_func() -> String {
    DEFAULT_FUNC_PROGRAM.to_string()
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub color: ColorMode,

    #[serde(default = "default_true")]
    pub unicode: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::default(),
            unicode: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub const VALID_VALUES: &'static [&'static str] = &["auto", "always", "never"];

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "auto" => Some(ColorMode::Auto),
            "always" => Some(ColorMode::Always),
            "never" => Some(ColorMode::Never),
            _ => None,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> ConfigResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Target used when the CLI does not name one.
    pub fn default_target(&self) -> DeploymentTarget {
        DeploymentTarget::new(&self.deploy.app_name, &self.deploy.resource_group)
    }

    pub fn command_plan(&self) -> CommandPlan {
        CommandPlan::new(&self.tools.az, &self.tools.func)
    }
}
