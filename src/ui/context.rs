use crate::config::{ColorMode, Config};
use crate::presentation::ColorWhen;
use crate::ui::terminal::TerminalCapabilities;

/// Resolved output settings for one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiContext {
    pub json: bool,
    pub verbose: u8,
    pub color: bool,
    pub unicode: bool,
}

impl UiContext {
    pub fn new(json: bool, verbose: u8, cli_color: Option<ColorWhen>, config: &Config) -> Self {
        Self::from_caps(json, verbose, cli_color, config, TerminalCapabilities::detect())
    }

    /// `--color` beats `output.color`; JSON output is never colored.
    pub(crate) fn from_caps(
        json: bool,
        verbose: u8,
        cli_color: Option<ColorWhen>,
        config: &Config,
        caps: TerminalCapabilities,
    ) -> Self {
        let mode = match cli_color {
            Some(ColorWhen::Always) => ColorMode::Always,
            Some(ColorWhen::Never) => ColorMode::Never,
            Some(ColorWhen::Auto) | None => config.output.color,
        };
        let color = !json
            && match mode {
                ColorMode::Always => true,
                ColorMode::Never => false,
                ColorMode::Auto => caps.supports_color && !caps.is_ci,
            };

        Self {
            json,
            verbose,
            color,
            unicode: config.output.unicode && caps.supports_unicode,
        }
    }
}
