use crossterm::style::Stylize;

use crate::ui::theme::Tone;

/// A message fragment styled by meaning rather than by color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColoredText {
    text: String,
    tone: Tone,
    bold: bool,
}

impl ColoredText {
    pub fn new(text: impl Into<String>, tone: Tone) -> Self {
        Self {
            text: text.into(),
            tone,
            bold: false,
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::new(text, Tone::Success)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(text, Tone::Error)
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self::new(text, Tone::Warning)
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self::new(text, Tone::Info)
    }

    pub fn dim(text: impl Into<String>) -> Self {
        Self::new(text, Tone::Dim)
    }

    pub fn bold(self) -> Self {
        Self { bold: true, ..self }
    }

    pub fn render(&self, supports_color: bool) -> String {
        if !supports_color {
            return self.text.clone();
        }
        let styled = self.text.as_str().with(self.tone.color());
        match self.bold {
            true => styled.bold().to_string(),
            false => styled.to_string(),
        }
    }
}
