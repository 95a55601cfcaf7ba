use crossterm::style::Stylize;

use crate::ui::theme::{glyphs, Glyph, Tone};

/// Leading marker of a status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Success,
    Error,
    Warning,
    Progress,
    Pending,
    Arrow,
    Deploy,
}

impl Icon {
    fn glyph(self) -> Glyph {
        match self {
            Icon::Success => glyphs::SUCCESS,
            Icon::Error => glyphs::ERROR,
            Icon::Warning => glyphs::WARNING,
            Icon::Progress => glyphs::RUNNING,
            Icon::Pending => glyphs::PENDING,
            Icon::Arrow => glyphs::DETAIL,
            Icon::Deploy => glyphs::DEPLOY,
        }
    }

    fn tone(self) -> Tone {
        match self {
            Icon::Success => Tone::Success,
            Icon::Error => Tone::Error,
            Icon::Warning | Icon::Progress => Tone::Warning,
            Icon::Pending | Icon::Arrow => Tone::Dim,
            Icon::Deploy => Tone::Info,
        }
    }

    pub fn render(&self, supports_unicode: bool) -> &'static str {
        self.glyph().pick(supports_unicode)
    }

    pub fn colored(&self, supports_color: bool, supports_unicode: bool) -> String {
        let glyph = self.render(supports_unicode);
        if supports_color {
            glyph.with(self.tone().color()).to_string()
        } else {
            glyph.to_string()
        }
    }
}
