//! Colors and status glyphs shared by every rendered line.
//!
//! Rendering code never names a terminal color or a glyph directly; it picks
//! a [`Tone`] or an [`Icon`](crate::ui::primitives::icon::Icon) and this
//! module decides what that looks like.

use crossterm::style::Color;

/// What a styled span means.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Error,
    Warning,
    Info,
    Dim,
}

impl Tone {
    pub fn color(self) -> Color {
        match self {
            Tone::Success => Color::Green,
            Tone::Error => Color::Red,
            Tone::Warning => Color::Yellow,
            Tone::Info => Color::Cyan,
            Tone::Dim => Color::DarkGrey,
        }
    }
}

/// A status glyph and the ASCII marker used when the locale can't show it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    pub unicode: &'static str,
    pub ascii: &'static str,
}

impl Glyph {
    const fn new(unicode: &'static str, ascii: &'static str) -> Self {
        Self { unicode, ascii }
    }

    pub fn pick(self, unicode: bool) -> &'static str {
        if unicode {
            self.unicode
        } else {
            self.ascii
        }
    }
}

pub mod glyphs {
    use super::Glyph;

    pub const SUCCESS: Glyph = Glyph::new("✓", "[OK]");
    pub const ERROR: Glyph = Glyph::new("✗", "[FAIL]");
    pub const WARNING: Glyph = Glyph::new("⚠", "[WARN]");
    pub const RUNNING: Glyph = Glyph::new("●", "[..]");
    pub const PENDING: Glyph = Glyph::new("○", "[ ]");
    pub const DETAIL: Glyph = Glyph::new("↳", "[>]");
    pub const DEPLOY: Glyph = Glyph::new("🚀", "[DEPLOY]");
}
