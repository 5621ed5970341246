//! Basic 8-color SGR palette. Chat-ops consoles and CI log viewers render these reliably,
//! unlike 24-bit escapes.

use std::fmt;

/// Foreground colors used by the severity table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Color {
    /// Terminal default foreground — the tag is still bolded.
    #[default]
    None,
    Red,
    Green,
    Yellow,
    Blue,
}

impl Color {
    /// Bold is applied to every tag regardless of color.
    pub const BOLD: &'static str = "\x1b[1m";

    /// Terminates any active SGR styling so subsequent text returns to the terminal default.
    pub const RESET: &'static str = "\x1b[0m";

    /// Foreground escape; empty for `None` so only bold is emitted.
    #[must_use]
    pub const fn fg_ansi(self) -> &'static str {
        match self {
            Self::None => "",
            Self::Red => "\x1b[31m",
            Self::Green => "\x1b[32m",
            Self::Yellow => "\x1b[33m",
            Self::Blue => "\x1b[34m",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::None => "none",
            Self::Red => "red",
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Blue => "blue",
        };
        f.write_str(name)
    }
}

/// Wraps `text` in bold plus `color`, always closing with a reset.
#[must_use]
pub fn colorize(text: &str, color: Color) -> String {
    let bold = Color::BOLD;
    let fg = color.fg_ansi();
    let reset = Color::RESET;
    format!("{bold}{fg}{text}{reset}")
}
