//! Stepwise construction so callers only name the parts they care about — the console
//! writer, the shared webhook config, the transport, and the pool size.

use super::{Lifecycle, Logger};
use crate::console::Console;
use crate::webhook::{
    DEFAULT_QUEUE_CAPACITY, DEFAULT_TIMEOUT, DEFAULT_WORKERS, LoggerConfig, Transport,
    UreqTransport,
};
use std::io::Write;
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub struct LoggerBuilder {
    console: Option<Console>,
    colors: bool,
    config: Option<Arc<LoggerConfig>>,
    transport: Option<Arc<dyn Transport>>,
    workers: usize,
    queue_capacity: usize,
    timeout: Duration,
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LoggerBuilder {
    /// Stdout with colors, notifications disabled.
    #[must_use]
    pub fn new() -> Self {
        Self {
            console: None,
            colors: true,
            config: None,
            transport: None,
            workers: DEFAULT_WORKERS,
            queue_capacity: DEFAULT_QUEUE_CAPACITY,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Piped output and CI log viewers may not render ANSI escapes.
    #[must_use]
    pub const fn colors(mut self, enabled: bool) -> Self {
        self.colors = enabled;
        self
    }

    /// Redirects console lines away from stdout.
    #[must_use]
    pub fn writer(mut self, writer: impl Write + Send + 'static) -> Self {
        self.console = Some(Console::with_writer(writer));
        self
    }

    /// Shares a config owned by the application so it can reconfigure the webhook later.
    #[must_use]
    pub fn config(mut self, config: Arc<LoggerConfig>) -> Self {
        self.config = Some(config);
        self
    }

    /// Enables notifications up front. Empty values leave them disabled.
    #[must_use]
    pub fn webhook(mut self, url: impl Into<String>, ping_id: impl Into<String>) -> Self {
        self.config = Some(Arc::new(LoggerConfig::with_target(url, ping_id)));
        self
    }

    /// Replaces the default `ureq` client.
    #[must_use]
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Upper bound on concurrent outbound requests.
    #[must_use]
    pub const fn workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    /// Notifications waiting beyond this many are dropped.
    #[must_use]
    pub const fn queue_capacity(mut self, capacity: usize) -> Self {
        self.queue_capacity = capacity;
        self
    }

    /// Per-request timeout for the default transport; ignored when `transport` is set.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub fn build(self) -> Logger {
        let console = self.console.unwrap_or_else(Console::stdout).colors(self.colors);
        let transport: Arc<dyn Transport> = match self.transport {
            Some(transport) => transport,
            None => Arc::new(UreqTransport::new(self.timeout)),
        };

        Logger {
            console: Arc::new(console),
            config: self.config.unwrap_or_default(),
            transport,
            workers: self.workers.max(1),
            queue_capacity: self.queue_capacity.max(1),
            lifecycle: Mutex::new(Lifecycle::default()),
        }
    }
}
