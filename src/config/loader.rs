//! Configuration discovery and loading

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, ConfigResult};

use super::env_validator::{closest, EnvVarValidator};
use super::types::{ColorMode, Config};
use super::ConfigWarning;

/// Project config file name, looked up in the working directory.
pub const PROJECT_CONFIG_FILE: &str = "funcship.toml";

/// A config plus where it came from.
#[derive(Debug, Clone, Default)]
pub struct LoadedConfig {
    pub config: Config,
    /// `None` when built-in defaults were used
    pub path: Option<PathBuf>,
    pub warnings: Vec<ConfigWarning>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> ConfigResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        file: path.to_path_buf(),
        source,
    })?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| ConfigError::Parse {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    validate(&config, path)?;

    let warnings = unknown_paths
        .into_iter()
        .map(|key| ConfigWarning {
            line: find_line_number(&content, &key),
            suggestion: suggest_key(&key),
            file: path.to_path_buf(),
            key,
        })
        .collect();

    Ok((config, warnings))
}

fn validate(config: &Config, path: &Path) -> ConfigResult<()> {
    let fields = [
        ("deploy.app_name", &config.deploy.app_name),
        ("deploy.resource_group", &config.deploy.resource_group),
        ("tools.az", &config.tools.az),
        ("tools.func", &config.tools.func),
    ];

    for (key, value) in fields {
        if value.trim().is_empty() {
            return Err(ConfigError::EmptyValue {
                key: key.to_string(),
                file: path.to_path_buf(),
            });
        }
    }
    Ok(())
}

/// Find and load the active config file.
///
/// `explicit` (from `--config`) must exist. Otherwise the project file in
/// `project_root` wins over the user file, and defaults apply when neither
/// exists.
pub fn discover(project_root: &Path, explicit: Option<&Path>) -> ConfigResult<LoadedConfig> {
    let candidate = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => {
            let project = project_root.join(PROJECT_CONFIG_FILE);
            if project.is_file() {
                Some(project)
            } else {
                user_config_path().filter(|p| p.is_file())
            }
        }
    };

    match candidate {
        Some(path) => {
            let (config, warnings) = load_with_warnings(&path)?;
            Ok(LoadedConfig {
                config,
                path: Some(path),
                warnings,
            })
        }
        None => Ok(LoadedConfig::default()),
    }
}

/// `<config dir>/funcship/config.toml`, if a config dir can be found.
pub fn user_config_path() -> Option<PathBuf> {
    user_config_dir(|key| std::env::var(key).ok())
        .map(|dir| dir.join("funcship").join("config.toml"))
}

/// `XDG_CONFIG_HOME`, then `$HOME/.config`, then the platform default.
///
/// Applies on macOS too, where `dirs` alone would pick
/// `~/Library/Application Support`.
fn user_config_dir(get_env: impl Fn(&str) -> Option<String>) -> Option<PathBuf> {
    let non_empty = |key: &str| get_env(key).filter(|v| !v.is_empty()).map(PathBuf::from);

    non_empty("XDG_CONFIG_HOME")
        .filter(|dir| dir.is_absolute())
        .or_else(|| non_empty("HOME").map(|home| home.join(".config")))
        .or_else(dirs::config_dir)
}

/// Apply environment variable overrides (FUNCSHIP_* prefix)
///
/// Empty values are ignored, so `FUNCSHIP_APP_NAME=` keeps the config value.
/// Invalid `FUNCSHIP_COLOR` values are reported to `warnings` and ignored.
pub fn apply_env_overrides<W: Write>(
    mut config: Config,
    get_env: impl Fn(&str) -> Option<String>,
    warnings: &mut W,
) -> Config {
    let non_empty = |key: &str| get_env(key).filter(|v| !v.trim().is_empty());

    if let Some(app_name) = non_empty("FUNCSHIP_APP_NAME") {
        config.deploy.app_name = app_name;
    }
    if let Some(resource_group) = non_empty("FUNCSHIP_RESOURCE_GROUP") {
        config.deploy.resource_group = resource_group;
    }
    if let Some(az) = non_empty("FUNCSHIP_AZ") {
        config.tools.az = az;
    }
    if let Some(func) = non_empty("FUNCSHIP_FUNC") {
        config.tools.func = func;
    }

    if let Some(color) = non_empty("FUNCSHIP_COLOR") {
        let validator = EnvVarValidator::new("FUNCSHIP_COLOR", ColorMode::VALID_VALUES);
        config.output.color =
            validator.parse_with_writer(&color, ColorMode::parse, config.output.color, warnings);
    }

    // https://no-color.org
    if get_env("NO_COLOR").is_some() {
        config.output.color = ColorMode::Never;
    }

    config
}

/// 1-based line of `dotted_key`'s assignment, searched only inside its own
/// table. An unknown table (`[deplyo]`) is located by its header instead.
fn find_line_number(content: &str, dotted_key: &str) -> Option<usize> {
    let (table, leaf) = dotted_key.rsplit_once('.').unwrap_or(("", dotted_key));
    let mut current = String::new();

    for (i, line) in content.lines().enumerate() {
        let line = line.trim();
        if let Some(header) = line.strip_prefix('[').and_then(|l| l.strip_suffix(']')) {
            current = header.trim().to_string();
            if current == dotted_key {
                return Some(i + 1);
            }
            continue;
        }

        let assigns_leaf = line
            .strip_prefix(leaf)
            .is_some_and(|rest| rest.trim_start().starts_with('='));
        if current == table && assigns_leaf {
            return Some(i + 1);
        }
    }
    None
}

/// Closest valid key in the same table as `dotted_key`.
fn suggest_key(dotted_key: &str) -> Option<String> {
    let (table, leaf) = dotted_key.rsplit_once('.').unwrap_or(("", dotted_key));
    let candidates: &[&str] = match table {
        "" => &["deploy", "tools", "output"],
        "deploy" => &["app_name", "resource_group"],
        "tools" => &["az", "func"],
        "output" => &["color", "unicode"],
        _ => &[],
    };

    closest(leaf, candidates).map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_line_number_matches_assignment_only() {
        let content = "[deploy]\n# app_nme is wrong\napp_nme = \"x\"\n";
        assert_eq!(find_line_number(content, "deploy.app_nme"), Some(3));
    }

    #[test]
    fn find_line_number_stays_inside_the_keys_table() {
        let content = "[tools]\naz = \"/opt/az\"\n\n[deploy]\naz = \"oops\"\n";
        assert_eq!(find_line_number(content, "deploy.az"), Some(5));
        assert_eq!(find_line_number(content, "output.az"), None);
    }

    #[test]
    fn find_line_number_locates_unknown_table_header() {
        let content = "[deploy]\napp_name = \"a\"\n\n[deplyo]\napp_name = \"b\"\n";
        assert_eq!(find_line_number(content, "deplyo"), Some(4));
    }

    #[test]
    fn find_line_number_top_level_key() {
        let content = "app_name = \"x\"\n[deploy]\napp_name = \"y\"\n";
        assert_eq!(find_line_number(content, "app_name"), Some(1));
    }

    #[test]
    fn suggest_key_uses_the_keys_table() {
        assert_eq!(
            suggest_key("deploy.resource_grp"),
            Some("resource_group".to_string())
        );
        assert_eq!(suggest_key("output.colour"), Some("color".to_string()));
        assert_eq!(suggest_key("deplyo"), Some("deploy".to_string()));
        assert_eq!(suggest_key("deploy.something_else"), None);
    }

    #[test]
    fn suggest_key_ignores_keys_from_other_tables() {
        assert_eq!(suggest_key("deploy.az"), None);
        assert_eq!(suggest_key("output.fnc"), None);
        assert_eq!(suggest_key("tools.fnc"), Some("func".to_string()));
    }

    #[test]
    fn user_config_dir_prefers_xdg() {
        let env = |key: &str| match key {
            "XDG_CONFIG_HOME" => Some("/xdg".to_string()),
            "HOME" => Some("/home/me".to_string()),
            _ => None,
        };
        assert_eq!(user_config_dir(env), Some(PathBuf::from("/xdg")));
    }

    #[test]
    fn user_config_dir_falls_back_to_home_dot_config() {
        let env = |key: &str| match key {
            "XDG_CONFIG_HOME" => Some("relative/dir".to_string()),
            "HOME" => Some("/home/me".to_string()),
            _ => None,
        };
        assert_eq!(
            user_config_dir(env),
            Some(PathBuf::from("/home/me/.config"))
        );
    }
}
