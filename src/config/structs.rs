//! Configuration struct definitions.

use crate::webhook::{DEFAULT_QUEUE_CAPACITY, DEFAULT_TIMEOUT, DEFAULT_WORKERS};
use serde::Deserialize;

/// Console output configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Enable ANSI colors.
    pub colors: bool,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self { colors: true }
    }
}

/// Webhook notification configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WebhookConfig {
    /// Webhook endpoint. Empty disables notifications.
    pub url: String,
    /// ID mentioned by panic notifications. Empty disables notifications.
    pub ping_id: String,
    /// Worker threads sending notifications.
    pub workers: usize,
    /// Pending notifications kept before new ones are dropped.
    pub queue_capacity: usize,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for WebhookConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            ping_id: String::new(),
            workers: DEFAULT_WORKERS,
            queue_capacity: DEFAULT_QUEUE_CAPACITY,
            timeout_secs: DEFAULT_TIMEOUT.as_secs(),
        }
    }
}
