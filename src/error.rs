//! Error types for funcship
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::PlatformError;
use crate::domain::value_objects::Stage;

/// Result type alias for configuration loading
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors raised while loading `funcship.toml`
#[derive(Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("failed to read {file}: {source}")]
    Io {
        file: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// TOML parsing error
    #[error("invalid config in {file}: {message}")]
    Parse { file: PathBuf, message: String },

    /// A string setting was present but empty
    #[error("'{key}' in {file} must not be empty")]
    EmptyValue { key: String, file: PathBuf },
}

/// A deploy stage whose platform command did not succeed
#[derive(Error, Debug)]
pub enum DeployError {
    /// The platform rejected or failed the runtime-version update
    #[error("runtime configuration failed: {0}")]
    RuntimeConfig(#[source] PlatformError),

    /// The platform rejected or failed the code publish
    #[error("publish failed: {0}")]
    Publish(#[source] PlatformError),

    /// The app could not be restarted after a successful publish
    #[error("restart failed: {0}")]
    Restart(#[source] PlatformError),
}

impl DeployError {
    pub fn from_stage(stage: Stage, source: PlatformError) -> Self {
        match stage {
            Stage::ConfigureRuntime => DeployError::RuntimeConfig(source),
            Stage::Publish => DeployError::Publish(source),
            Stage::Restart => DeployError::Restart(source),
        }
    }

    pub fn stage(&self) -> Stage {
        match self {
            DeployError::RuntimeConfig(_) => Stage::ConfigureRuntime,
            DeployError::Publish(_) => Stage::Publish,
            DeployError::Restart(_) => Stage::Restart,
        }
    }

    /// Only runtime and publish failures abort with a non-zero exit.
    pub fn is_fatal(&self) -> bool {
        self.stage().is_fatal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exit(code: i32) -> PlatformError {
        PlatformError::Exit {
            program: "az".to_string(),
            code,
        }
    }

    #[test]
    fn test_error_display_runtime_config() {
        let err = DeployError::RuntimeConfig(exit(2));
        assert_eq!(
            err.to_string(),
            "runtime configuration failed: 'az' exited with status 2"
        );
    }

    #[test]
    fn test_error_stage_round_trip() {
        for stage in Stage::ALL {
            assert_eq!(DeployError::from_stage(stage, exit(1)).stage(), stage);
        }
    }

    #[test]
    fn test_restart_error_is_not_fatal() {
        assert!(DeployError::Publish(exit(1)).is_fatal());
        assert!(!DeployError::Restart(exit(1)).is_fatal());
    }

    #[test]
    fn test_error_display_empty_value() {
        let err = ConfigError::EmptyValue {
            key: "deploy.app_name".to_string(),
            file: PathBuf::from("funcship.toml"),
        };
        assert_eq!(
            err.to_string(),
            "'deploy.app_name' in funcship.toml must not be empty"
        );
    }
}
