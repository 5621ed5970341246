//! Best-effort forwarding of log messages to a chat webhook.
//!
//! Split by concern: `settings` holds the shared target, `payload` builds request bodies,
//! `transport` performs the HTTP call, and `dispatcher` moves work off the caller's thread.

mod dispatcher;
mod payload;
mod settings;
mod transport;

pub use dispatcher::{DEFAULT_QUEUE_CAPACITY, DEFAULT_WORKERS, Dispatcher, Job};
pub use payload::{ATTACHMENT_FIELD, ATTACHMENT_FILENAME, Multipart, Notification};
pub use settings::{LoggerConfig, WebhookTarget};
pub use transport::{DEFAULT_TIMEOUT, JSON_CONTENT_TYPE, Transport, UreqTransport};
