//! Terminal capability detection
//!
//! Everything is derived from stdout's TTY status and the environment, so the
//! same binary prints plain ASCII under a build agent and glyphs on a desktop.

use is_terminal::IsTerminal;

/// Environment variables whose presence marks a CI runner.
const CI_MARKERS: &[&str] = &[
    "CI",
    "TF_BUILD",
    "GITHUB_ACTIONS",
    "GITLAB_CI",
    "JENKINS_HOME",
    "BUILDKITE",
    "CIRCLECI",
];

/// Checked in POSIX precedence order.
const LOCALE_VARS: &[&str] = &["LC_ALL", "LC_CTYPE", "LANG"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalCapabilities {
    pub is_tty: bool,
    pub supports_color: bool,
    pub supports_unicode: bool,
    pub is_ci: bool,
}

impl TerminalCapabilities {
    /// Inspect the real stdout and process environment.
    pub fn detect() -> Self {
        Self::from_env(|key| std::env::var(key).ok(), std::io::stdout().is_terminal())
    }

    pub(crate) fn from_env(get_env: impl Fn(&str) -> Option<String>, is_tty: bool) -> Self {
        let dumb = get_env("TERM").is_some_and(|term| term.eq_ignore_ascii_case("dumb"));

        Self {
            is_tty,
            supports_color: is_tty && !dumb && get_env("NO_COLOR").is_none(),
            supports_unicode: !dumb && locale_is_utf8(&get_env),
            is_ci: CI_MARKERS.iter().any(|key| get_env(key).is_some()),
        }
    }
}

/// The first non-empty locale variable decides; unset everywhere means UTF-8.
fn locale_is_utf8(get_env: &impl Fn(&str) -> Option<String>) -> bool {
    LOCALE_VARS
        .iter()
        .filter_map(|key| get_env(key))
        .find(|value| !value.is_empty())
        .map_or(true, |value| {
            let value = value.to_ascii_lowercase();
            value.contains("utf-8") || value.contains("utf8")
        })
}
