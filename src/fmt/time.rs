//! Console timestamps in local time.

use chrono::{DateTime, Local, TimeZone};

/// `2024/01/31 13:05:09` — sorts lexically and matches the classic `log` prefix.
pub const TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

#[must_use]
pub fn now() -> String {
    format(&Local::now())
}

/// Split out from `now` so tests and benches can render a fixed instant.
#[must_use]
pub fn format<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    at.format(TIMESTAMP_FORMAT).to_string()
}
