//! The HTTP side of notifications. A trait so integrations can swap the client and tests can
//! record requests instead of sending them.

use std::time::Duration;
use ureq::Agent;

/// Upper bound on one webhook request, connect through response.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Content type of the text notification.
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Called from dispatcher worker threads, hence `Send + Sync`.
pub trait Transport: Send + Sync {
    /// POSTs `body` to `url` with the given `Content-Type`.
    ///
    /// # Errors
    /// Connection, TLS, timeout, or non-2xx status.
    fn post(&self, url: &str, content_type: &str, body: &[u8]) -> Result<(), crate::Error>;
}

/// Blocking `ureq` client (rustls with bundled web PKI roots).
#[derive(Debug, Clone)]
pub struct UreqTransport {
    agent: Agent,
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new(DEFAULT_TIMEOUT)
    }
}

impl UreqTransport {
    /// One agent for all requests so connections are pooled across notifications.
    #[must_use]
    pub fn new(timeout: Duration) -> Self {
        let agent = Agent::config_builder()
            .timeout_global(Some(timeout))
            .build()
            .into();

        Self { agent }
    }
}

impl Transport for UreqTransport {
    fn post(&self, url: &str, content_type: &str, body: &[u8]) -> Result<(), crate::Error> {
        self.agent
            .post(url)
            .header("Content-Type", content_type)
            .send(body)?;
        Ok(())
    }
}
