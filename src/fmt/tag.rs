//! Fixed-width severity tags. Every label is padded to the width of the longest one
//! so the `|` separator lines up in a column.

use super::color::colorize;
use crate::severity::Severity;

/// Width of `[SUCCESS]`, the longest label.
pub const TAG_WIDTH: usize = 9;

/// Label left-aligned in `TAG_WIDTH` columns followed by one space, e.g. `"[WARN]    "`.
#[must_use]
pub fn pad(severity: Severity) -> String {
    format!("{:<width$} ", severity.label(), width = TAG_WIDTH)
}

/// Padded tag, wrapped in the severity's SGR sequence when `colors` is set.
/// The padding sits inside the escape so the reset lands right before the separator.
#[must_use]
pub fn render(severity: Severity, colors: bool) -> String {
    let padded = pad(severity);
    if colors {
        colorize(&padded, severity.color())
    } else {
        padded
    }
}
