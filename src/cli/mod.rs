//! Command-line front end — lets shell scripts and cron jobs emit a tagged line and, when a
//! webhook is configured, page someone, without writing any Rust.

use crate::config::Config;
use crate::logger::Logger;
use crate::severity::Severity;
use clap::Parser;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

/// Accepts every spelling `Severity::from_str` does (`warn`, `err`, `ok`, any case).
fn parse_severity(s: &str) -> Result<Severity, crate::Error> {
    Ok(s.parse::<Severity>()?)
}

/// hooklog - Print a tagged log line and optionally forward it to a webhook.
#[derive(Debug, Parser)]
#[command(
    name = "hooklog",
    version,
    about = "Print a tagged log line and optionally forward it to a webhook"
)]
pub struct Cli {
    /// Config file (defaults to the XDG config dir)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
    /// Webhook URL, overrides the config file
    #[arg(long, value_name = "URL")]
    pub webhook: Option<String>,
    /// ID mentioned by panic notifications, overrides the config file
    #[arg(long, value_name = "ID")]
    pub ping_id: Option<String>,
    /// Disable ANSI colors
    #[arg(long)]
    pub no_color: bool,
    /// Forward the message to the webhook
    #[arg(short, long)]
    pub notify: bool,
    /// Upload this file along with the message (implies --notify)
    #[arg(short, long, value_name = "FILE")]
    pub attach: Option<PathBuf>,
    /// info, warn, error, panic or success
    #[arg(value_name = "SEVERITY", value_parser = parse_severity)]
    pub severity: Severity,
    /// Log message
    #[arg(required = true)]
    pub message: Vec<String>,
}

impl Cli {
    /// Loads config, applies flag overrides, emits, and waits for notifications to finish.
    #[must_use]
    pub fn run(self) -> ExitCode {
        let config = match self.config.as_deref() {
            Some(path) => Config::load_from(path),
            None => Config::load(),
        };
        let config = match config {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error loading config: {e}");
                return ExitCode::FAILURE;
            }
        };

        let mut builder = config.builder();
        if self.no_color {
            builder = builder.colors(false);
        }
        let logger = builder.build();

        let code = self.emit(&logger, &config);
        logger.close();
        code
    }

    /// Applies `--webhook`/`--ping-id` over `config` through `configure`, then writes the line
    /// with the variant the flags select. Queued notifications are left for the caller's
    /// `close`.
    #[must_use]
    pub fn emit(&self, logger: &Logger, config: &Config) -> ExitCode {
        if self.webhook.is_some() || self.ping_id.is_some() {
            logger.configure(
                self.webhook.as_deref().unwrap_or(&config.webhook.url),
                self.ping_id.as_deref().unwrap_or(&config.webhook.ping_id),
            );
        }

        let severity = self.severity;
        let msg = self.message.join(" ");
        match &self.attach {
            Some(path) => match fs::read(path) {
                Ok(bytes) => logger.emit_with_attachment(severity, &msg, bytes, severity.pings()),
                Err(e) => {
                    logger.error(format_args!("cannot read {}: {e}", path.display()));
                    return ExitCode::FAILURE;
                }
            },
            None if self.notify => logger.emit_and_notify(severity, &msg, severity.pings()),
            None => logger.emit(severity, &msg),
        }
        ExitCode::SUCCESS
    }
}
