//! Badges, status colors and chart glyphs.

use owo_colors::{OwoColorize, Style};

use subtrack_core::Status;

/// Glyph with ASCII and Unicode variants.
#[derive(Debug, Clone, Copy)]
pub struct SymbolPair {
    pub ascii: &'static str,
    pub unicode: &'static str,
}

impl SymbolPair {
    pub const fn new(ascii: &'static str, unicode: &'static str) -> Self {
        Self { ascii, unicode }
    }

    pub fn get(&self, unicode: bool) -> &'static str {
        if unicode {
            self.unicode
        } else {
            self.ascii
        }
    }
}

/// Filled segment of a chart bar.
pub const BAR_FILL: SymbolPair = SymbolPair::new("#", "\u{2588}");

/// Header separator ("SubTrack · list").
pub const DOT: SymbolPair = SymbolPair::new("-", "\u{00B7}");

/// Badge types for status lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Badge {
    Ok,
    Warn,
    Err,
}

impl Badge {
    pub fn display(&self, unicode: bool) -> &'static str {
        let pair = match self {
            Self::Ok => SymbolPair::new("[OK]", "[\u{2713}]"),
            Self::Warn => SymbolPair::new("[WARN]", "[\u{26A0}]"),
            Self::Err => SymbolPair::new("[ERR]", "[\u{2717}]"),
        };
        pair.get(unicode)
    }

    pub fn style(&self) -> Style {
        match self {
            Self::Ok => styles::green(),
            Self::Warn => styles::yellow(),
            Self::Err => styles::red(),
        }
    }
}

pub mod styles {
    use owo_colors::Style;

    pub fn bold() -> Style {
        Style::new().bold()
    }

    pub fn dim() -> Style {
        Style::new().dimmed()
    }

    pub fn green() -> Style {
        Style::new().green()
    }

    pub fn yellow() -> Style {
        Style::new().yellow()
    }

    pub fn red() -> Style {
        Style::new().red()
    }

    pub fn cyan() -> Style {
        Style::new().cyan()
    }
}

/// Color used for a subscription status in pretty output.
pub fn status_style(status: Status) -> Style {
    match status {
        Status::Active => styles::green(),
        Status::Paused => styles::yellow(),
        Status::Cancelled => styles::dim(),
    }
}

/// Apply `style` to `text` when color is enabled.
pub fn styled(text: &str, style: Style, color: bool) -> String {
    if color {
        text.style(style).to_string()
    } else {
        text.to_string()
    }
}
