use std::io::Write;
use std::path::Path;

use crate::config::ConfigWarning;
use crate::ui::primitives::icon::Icon;
use crate::ui::UiContext;

/// Write unknown-key warnings. The caller passes stderr, so JSON mode
/// gets them too without touching the NDJSON stream.
pub fn print_config_warnings<W: Write>(out: &mut W, warnings: &[ConfigWarning], ui: &UiContext) {
    for warning in warnings {
        let _ = writeln!(
            out,
            "{} {}",
            Icon::Warning.colored(ui.color, ui.unicode),
            warning
        );
    }
}

/// `-v` diagnostic naming the config file in effect.
pub fn print_config_source<W: Write>(out: &mut W, path: Option<&Path>, ui: &UiContext) {
    if ui.json || ui.verbose == 0 {
        return;
    }
    let _ = match path {
        Some(path) => writeln!(out, "Using config {}", path.display()),
        None => writeln!(out, "No config file found; using built-in defaults"),
    };
}
