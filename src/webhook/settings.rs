//! Where notifications go and who they mention. Held behind an `Arc<LoggerConfig>` that the
//! logger and the application share, and read on every notifying call, so reads and the
//! occasional reconfigure go through one `RwLock`.

use std::sync::{PoisonError, RwLock};

/// A consistent `{url, ping_id}` pair, only ever produced while notifications are enabled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebhookTarget {
    pub url: String,
    pub ping_id: String,
}

impl WebhookTarget {
    /// `<@id>` — the chat mention syntax placed in front of paging messages.
    #[must_use]
    pub fn mention(&self) -> String {
        format!("<@{}>", self.ping_id)
    }
}

#[derive(Debug, Default)]
struct State {
    url: String,
    ping_id: String,
    enabled: bool,
}

/// Injectable webhook configuration. Starts disabled; `configure` may be called any number
/// of times and the last call wins.
#[derive(Debug, Default)]
pub struct LoggerConfig {
    state: RwLock<State>,
}

impl LoggerConfig {
    /// Disabled until `configure` is called with two non-empty values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Already configured — shorthand for `new` followed by `configure`.
    #[must_use]
    pub fn with_target(url: impl Into<String>, ping_id: impl Into<String>) -> Self {
        let config = Self::new();
        config.configure(url, ping_id);
        config
    }

    /// Replaces URL, ping ID, and the derived enabled flag in one critical section.
    /// No URL validation; an empty value on either side disables notifications.
    pub fn configure(&self, url: impl Into<String>, ping_id: impl Into<String>) {
        let url = url.into();
        let ping_id = ping_id.into();
        let enabled = !url.is_empty() && !ping_id.is_empty();

        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        state.url = url;
        state.ping_id = ping_id;
        state.enabled = enabled;
    }

    /// Back to the startup state.
    pub fn disable(&self) {
        self.configure("", "");
    }

    #[must_use]
    pub fn notifications_enabled(&self) -> bool {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .enabled
    }

    /// The current target, or `None` while disabled. Read under one lock, so the URL and
    /// ping ID always come from the same `configure` call.
    #[must_use]
    pub fn target(&self) -> Option<WebhookTarget> {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        state.enabled.then(|| WebhookTarget {
            url: state.url.clone(),
            ping_id: state.ping_id.clone(),
        })
    }
}
