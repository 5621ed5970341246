//! Severity tags attached to every console line, each with a fixed label and color.

use crate::fmt::Color;
use std::fmt;
use std::str::FromStr;

/// `Panic` is a label only — nothing in this crate aborts or unwinds when it is used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Severity {
    /// Routine progress worth seeing on the console.
    #[default]
    Info,
    /// Something unexpected that did not stop the operation.
    Warning,
    /// An operation failed.
    Error,
    /// Needs a human now — notifications at this severity mention the configured ping ID.
    Panic,
    /// An operation completed the way it should.
    Success,
}

/// Row of the lookup table — label, color, and mention policy travel together so a new severity
/// cannot be added with only half of its presentation defined.
struct Style {
    label: &'static str,
    color: Color,
    pings: bool,
}

const fn style(severity: Severity) -> Style {
    match severity {
        Severity::Info => Style {
            label: "[INFO]",
            color: Color::None,
            pings: false,
        },
        Severity::Warning => Style {
            label: "[WARN]",
            color: Color::Yellow,
            pings: false,
        },
        Severity::Error => Style {
            label: "[ERROR]",
            color: Color::Red,
            pings: false,
        },
        Severity::Panic => Style {
            label: "[PANIC]",
            color: Color::Blue,
            pings: true,
        },
        Severity::Success => Style {
            label: "[SUCCESS]",
            color: Color::Green,
            pings: false,
        },
    }
}

impl Severity {
    /// Lowercase name used by config files and the CLI.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Panic => "panic",
            Self::Success => "success",
        }
    }

    /// Bracketed console label, e.g. `[WARN]`.
    #[must_use]
    pub const fn label(self) -> &'static str {
        style(self).label
    }

    #[must_use]
    pub const fn color(self) -> Color {
        style(self).color
    }

    /// Whether notifications at this severity prefix the mention token.
    #[must_use]
    pub const fn pings(self) -> bool {
        style(self).pings
    }

    /// Convenience for iteration — used by help output and tests.
    #[must_use]
    pub const fn all() -> [Self; 5] {
        [
            Self::Info,
            Self::Warning,
            Self::Error,
            Self::Panic,
            Self::Success,
        ]
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned by `FromStr` so callers can distinguish "unknown severity" from other parse failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseSeverityError(String);

impl fmt::Display for ParseSeverityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown severity: '{}'", self.0)
    }
}

impl std::error::Error for ParseSeverityError {}

impl FromStr for Severity {
    type Err = ParseSeverityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warning),
            "error" | "err" => Ok(Self::Error),
            "panic" => Ok(Self::Panic),
            "success" | "ok" => Ok(Self::Success),
            _ => Err(ParseSeverityError(s.to_string())),
        }
    }
}
