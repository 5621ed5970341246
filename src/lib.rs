//! `hooklog` - Severity-tagged console logging with best-effort webhook notifications.
//!
//! Every call writes one timestamped, color-tagged line to the console under a single lock.
//! The `*_and_notify` and `*_with_attachment` variants additionally forward the message to a
//! chat webhook from a small background worker pool. Delivery is fire-and-forget: failures
//! show up as an extra `[ERROR]` line and never reach the caller.
//!
//! # Example
//!
//! ```no_run
//! use hooklog::Logger;
//!
//! let logger = Logger::builder().colors(false).build();
//!
//! logger.info("service starting");
//! logger.warn("cache miss rate above 40%");
//!
//! // Notifications stay off until both a URL and a ping ID are configured.
//! logger.configure("https://chat.example/api/webhooks/1/abc", "123456789");
//! logger.panic_and_notify("primary database unreachable");
//! logger.close();
//! ```
//!
//! # Features
//!
//! - `cli` (default): Enables the `hooklog` binary

pub mod config;
pub mod console;
pub mod entry;
pub mod error;
pub mod fmt;
pub mod logger;
pub mod severity;
pub mod webhook;

// CLI module (feature-gated)
#[cfg(feature = "cli")]
pub mod cli;

// Re-exports for convenience
pub use config::Config;
pub use console::Console;
pub use entry::LogEntry;
pub use error::Error;
pub use logger::{Logger, LoggerBuilder};
pub use severity::{ParseSeverityError, Severity};
pub use webhook::{LoggerConfig, Notification, Transport, UreqTransport, WebhookTarget};
