//! Pieces of a console line: colors, the padded tag, the timestamp, and newline handling.

mod color;
pub mod tag;
pub mod time;

pub use color::{Color, colorize};
pub use tag::TAG_WIDTH;

/// Exactly one trailing newline. A run of trailing newlines collapses to one, so
/// applying this twice changes nothing.
#[must_use]
pub fn ensure_newline(msg: &str) -> String {
    let body = msg.trim_end_matches('\n');
    format!("{body}\n")
}

/// Assembles `<ts> <tag>| <message>\n` from already-rendered parts.
#[must_use]
pub fn line(timestamp: &str, tag: &str, msg: &str) -> String {
    ensure_newline(&format!("{timestamp} {tag}| {msg}"))
}
