//! Configuration warning value object.

use std::fmt;
use std::path::PathBuf;

/// Unknown key found while loading a `funcship.toml`.
///
/// Loading never fails because of these; the CLI prints them to stderr and
/// carries on with the keys it understood.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    /// Dotted path of the unknown key (e.g. `deploy.app`)
    pub key: String,
    pub file: PathBuf,
    /// 1-indexed line of the first occurrence, if it could be located
    pub line: Option<usize>,
    /// Closest known key, when one is within two edits
    pub suggestion: Option<String>,
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line {
            Some(line) => write!(
                f,
                "unknown config key '{}' in {}:{}",
                self.key,
                self.file.display(),
                line
            )?,
            None => write!(
                f,
                "unknown config key '{}' in {}",
                self.key,
                self.file.display()
            )?,
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_line_and_suggestion() {
        let warning = ConfigWarning {
            key: "deploy.app".to_string(),
            file: PathBuf::from("funcship.toml"),
            line: Some(2),
            suggestion: Some("app_name".to_string()),
        };
        assert_eq!(
            warning.to_string(),
            "unknown config key 'deploy.app' in funcship.toml:2 (did you mean 'app_name'?)"
        );
    }

    #[test]
    fn display_without_line() {
        let warning = ConfigWarning {
            key: "extra".to_string(),
            file: PathBuf::from("funcship.toml"),
            line: None,
            suggestion: None,
        };
        assert_eq!(
            warning.to_string(),
            "unknown config key 'extra' in funcship.toml"
        );
    }
}
