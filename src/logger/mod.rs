//! The logging entry points. Every call writes its console line synchronously; the notifying
//! variants then hand a job to the background dispatcher and return without waiting on it.

mod builder;
mod macros;

pub use builder::LoggerBuilder;

use crate::config::Config;
use crate::console::Console;
use crate::entry::LogEntry;
use crate::severity::Severity;
use crate::webhook::{Dispatcher, Job, LoggerConfig, Notification, Transport};
use std::fmt::Display;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Share one instance per process (behind an `Arc`, or in a `LazyLock` static) to keep every line
/// behind the same console lock.
pub struct Logger {
    console: Arc<Console>,
    config: Arc<LoggerConfig>,
    transport: Arc<dyn Transport>,
    workers: usize,
    queue_capacity: usize,
    lifecycle: Mutex<Lifecycle>,
}

/// The closed flag and the lazily started dispatcher change together, under one lock, so a
/// submit racing `close` either lands in the queue that `close` drains or sees `closed`.
#[derive(Default)]
struct Lifecycle {
    /// Started on the first enabled notification; a logger that never notifies spawns no threads.
    dispatcher: Option<Arc<Dispatcher>>,
    closed: bool,
}

impl Default for Logger {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("console", &self.console)
            .field("config", &self.config)
            .field("workers", &self.workers)
            .field("queue_capacity", &self.queue_capacity)
            .field("closed", &self.is_closed())
            .finish_non_exhaustive()
    }
}

impl Logger {
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    /// Stdout, colors on, notifications disabled.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds from a loaded config file.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        config.builder().build()
    }

    /// Shared webhook settings — hold on to this to reconfigure later.
    #[must_use]
    pub const fn config(&self) -> &Arc<LoggerConfig> {
        &self.config
    }

    /// Shorthand for `config().configure(...)`.
    pub fn configure(&self, url: impl Into<String>, ping_id: impl Into<String>) {
        self.config.configure(url, ping_id);
    }

    #[must_use]
    pub fn notifications_enabled(&self) -> bool {
        self.config.notifications_enabled()
    }

    /// Console only.
    pub fn emit(&self, severity: Severity, msg: impl Display) {
        self.console.write(severity, &msg.to_string());
    }

    /// Console only, from a prepared entry.
    pub fn emit_entry(&self, entry: &LogEntry) {
        self.console
            .write_line(&entry.render(self.console.colors_enabled()));
    }

    /// Console, then a text notification if enabled. `ping` prefixes the mention.
    pub fn emit_and_notify(&self, severity: Severity, msg: impl Display, ping: bool) {
        let msg = msg.to_string();
        self.console.write(severity, &msg);

        let Some(target) = self.config.target() else {
            return;
        };
        let mention = ping.then(|| target.mention());
        self.submit(Job::Text {
            url: target.url,
            notification: Notification::new(&msg, mention.as_deref()),
        });
    }

    /// Console, then an attachment upload followed by a text notification if enabled.
    /// While disabled, the attachment is printed as a second console line instead.
    pub fn emit_with_attachment(
        &self,
        severity: Severity,
        msg: impl Display,
        attachment: impl Into<Vec<u8>>,
        ping: bool,
    ) {
        let msg = msg.to_string();
        let attachment = attachment.into();
        self.console.write(severity, &msg);

        let Some(target) = self.config.target() else {
            self.console
                .write(severity, &String::from_utf8_lossy(&attachment));
            return;
        };
        let mention = ping.then(|| target.mention());
        self.submit(Job::Attachment {
            url: target.url,
            attachment,
            notification: Notification::new(&msg, mention.as_deref()),
        });
    }

    /// Stops accepting notifications and waits for queued ones to finish. Console logging
    /// keeps working. Call before process exit so in-flight notifications are not cut off.
    /// Concurrent callers all return only after the queue is drained.
    pub fn close(&self) {
        let dispatcher = {
            let mut lifecycle = self.lifecycle();
            lifecycle.closed = true;
            lifecycle.dispatcher.clone()
        };
        // Joined outside the lock so callers racing the shutdown get `Closed` instead of waiting.
        if let Some(dispatcher) = dispatcher {
            dispatcher.close();
        }
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.lifecycle().closed
    }

    fn lifecycle(&self) -> MutexGuard<'_, Lifecycle> {
        self.lifecycle.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn submit(&self, job: Job) {
        let result = {
            let mut lifecycle = self.lifecycle();
            if lifecycle.closed {
                Err(crate::Error::Closed)
            } else {
                lifecycle
                    .dispatcher
                    .get_or_insert_with(|| {
                        Arc::new(Dispatcher::spawn(
                            self.workers,
                            self.queue_capacity,
                            Arc::clone(&self.transport),
                            Arc::clone(&self.console),
                        ))
                    })
                    .submit(job)
            }
        };

        if let Err(e) = result {
            self.console.write(
                Severity::Error,
                &format!("webhook: notification dropped: {e}"),
            );
        }
    }

    pub fn info(&self, msg: impl Display) {
        self.emit(Severity::Info, msg);
    }

    pub fn info_and_notify(&self, msg: impl Display) {
        self.emit_and_notify(Severity::Info, msg, Severity::Info.pings());
    }

    pub fn info_with_attachment(&self, msg: impl Display, attachment: impl Into<Vec<u8>>) {
        self.emit_with_attachment(Severity::Info, msg, attachment, Severity::Info.pings());
    }

    pub fn warn(&self, msg: impl Display) {
        self.emit(Severity::Warning, msg);
    }

    pub fn warn_and_notify(&self, msg: impl Display) {
        self.emit_and_notify(Severity::Warning, msg, Severity::Warning.pings());
    }

    pub fn warn_with_attachment(&self, msg: impl Display, attachment: impl Into<Vec<u8>>) {
        self.emit_with_attachment(
            Severity::Warning,
            msg,
            attachment,
            Severity::Warning.pings(),
        );
    }

    pub fn error(&self, msg: impl Display) {
        self.emit(Severity::Error, msg);
    }

    pub fn error_and_notify(&self, msg: impl Display) {
        self.emit_and_notify(Severity::Error, msg, Severity::Error.pings());
    }

    pub fn error_with_attachment(&self, msg: impl Display, attachment: impl Into<Vec<u8>>) {
        self.emit_with_attachment(Severity::Error, msg, attachment, Severity::Error.pings());
    }

    /// Label only — does not unwind.
    pub fn panic(&self, msg: impl Display) {
        self.emit(Severity::Panic, msg);
    }

    /// Always mentions the configured ping ID.
    pub fn panic_and_notify(&self, msg: impl Display) {
        self.emit_and_notify(Severity::Panic, msg, Severity::Panic.pings());
    }

    /// Always mentions the configured ping ID.
    pub fn panic_with_attachment(&self, msg: impl Display, attachment: impl Into<Vec<u8>>) {
        self.emit_with_attachment(Severity::Panic, msg, attachment, Severity::Panic.pings());
    }

    pub fn success(&self, msg: impl Display) {
        self.emit(Severity::Success, msg);
    }

    pub fn success_and_notify(&self, msg: impl Display) {
        self.emit_and_notify(Severity::Success, msg, Severity::Success.pings());
    }

    pub fn success_with_attachment(&self, msg: impl Display, attachment: impl Into<Vec<u8>>) {
        self.emit_with_attachment(
            Severity::Success,
            msg,
            attachment,
            Severity::Success.pings(),
        );
    }
}
