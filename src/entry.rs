//! Entries built ahead of time and emitted later — e.g. collected during a batch job and
//! flushed once it finishes.

use crate::fmt::{self, tag, time};
use crate::severity::Severity;
use std::fmt as std_fmt;

/// A severity and message pair, independent of any logger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub severity: Severity,
    pub message: String,
}

impl LogEntry {
    #[must_use]
    pub fn new(severity: Severity, message: impl std_fmt::Display) -> Self {
        Self {
            severity,
            message: message.to_string(),
        }
    }

    /// The full console line with the given timestamp, including the trailing newline.
    #[must_use]
    pub fn render_at(&self, timestamp: &str, colors: bool) -> String {
        fmt::line(timestamp, &tag::render(self.severity, colors), &self.message)
    }

    /// The full console line stamped with the current local time.
    #[must_use]
    pub fn render(&self, colors: bool) -> String {
        self.render_at(&time::now(), colors)
    }
}

/// Plain `<tag>| <message>` without timestamp or trailing newline.
impl std_fmt::Display for LogEntry {
    fn fmt(&self, f: &mut std_fmt::Formatter<'_>) -> std_fmt::Result {
        write!(
            f,
            "{}| {}",
            tag::pad(self.severity),
            self.message.trim_end_matches('\n')
        )
    }
}
