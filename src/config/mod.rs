//! TOML configuration for applications that would rather keep the webhook target and console
//! settings in a file than wire them up in code.
//!
//! ```toml
//! [console]
//! colors = false
//!
//! [webhook]
//! url = "https://chat.example/api/webhooks/1/abc"
//! ping_id = "123456789"
//! workers = 4
//! ```

mod structs;

pub use structs::{ConsoleConfig, WebhookConfig};

use crate::logger::LoggerBuilder;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// An empty file is a valid config — `#[serde(default)]` on every section.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub console: ConsoleConfig,
    pub webhook: WebhookConfig,
}

impl Config {
    /// Loads from the default location; a missing file yields defaults.
    ///
    /// # Errors
    /// Fails if the config directory can't be determined, the file can't be read, or the
    /// TOML is malformed.
    pub fn load() -> Result<Self, crate::Error> {
        Self::load_from(&Self::get_config_path()?)
    }

    /// Loads from an explicit path; a missing file yields defaults.
    ///
    /// # Errors
    /// Returns error if the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self, crate::Error> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// # Errors
    /// TOML syntax or type errors.
    pub fn from_toml(content: &str) -> Result<Self, crate::Error> {
        Ok(toml::from_str(content)?)
    }

    /// `<XDG config dir>/hooklog/hooklog.toml`.
    ///
    /// # Errors
    /// Fails when the platform has no concept of a config directory.
    pub fn get_config_path() -> Result<PathBuf, crate::Error> {
        directories::BaseDirs::new()
            .map(|dirs| dirs.config_dir().join("hooklog").join("hooklog.toml"))
            .ok_or(crate::Error::ConfigDirNotFound)
    }

    #[must_use]
    pub fn notifications_enabled(&self) -> bool {
        !self.webhook.url.is_empty() && !self.webhook.ping_id.is_empty()
    }

    /// A builder carrying every setting from this config; further builder calls override them.
    #[must_use]
    pub fn builder(&self) -> LoggerBuilder {
        LoggerBuilder::new()
            .colors(self.console.colors)
            .webhook(self.webhook.url.clone(), self.webhook.ping_id.clone())
            .workers(self.webhook.workers)
            .queue_capacity(self.webhook.queue_capacity)
            .timeout(Duration::from_secs(self.webhook.timeout_secs))
    }
}
