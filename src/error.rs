//! Unified error type for all hooklog operations.
//!
//! None of these reach callers of the logging functions — notification failures are
//! printed as Error lines and dropped. They surface only from config loading and from
//! the pieces (transport, dispatcher) that tests and custom integrations drive directly.

/// Error type for hooklog operations.
#[derive(Debug)]
pub enum Error {
    /// I/O error.
    Io(std::io::Error),
    /// TOML config parsing error.
    ConfigParse(toml::de::Error),
    /// Config directory not found.
    ConfigDirNotFound,
    /// Notification payload could not be encoded.
    Json(serde_json::Error),
    /// Webhook request failed or was answered with a non-success status.
    Http(String),
    /// Notification queue is at capacity.
    QueueFull,
    /// Dispatcher has been closed.
    Closed,
    /// Unknown severity name.
    InvalidSeverity(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::ConfigParse(e) => write!(f, "parse error: {e}"),
            Self::ConfigDirNotFound => write!(f, "config directory not found"),
            Self::Json(e) => write!(f, "payload encoding error: {e}"),
            Self::Http(e) => write!(f, "HTTP error: {e}"),
            Self::QueueFull => write!(f, "notification queue full"),
            Self::Closed => write!(f, "notification dispatcher closed"),
            Self::InvalidSeverity(s) => write!(f, "invalid severity: {s}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::ConfigParse(e) => Some(e),
            Self::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Self::ConfigParse(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

impl From<ureq::Error> for Error {
    fn from(e: ureq::Error) -> Self {
        Self::Http(e.to_string())
    }
}

impl From<crate::severity::ParseSeverityError> for Error {
    fn from(e: crate::severity::ParseSeverityError) -> Self {
        Self::InvalidSeverity(e.to_string())
    }
}
