//! Tests for TOML configuration loading.

mod common;

use common::{RecordingTransport, SharedBuf};
use hooklog::{Config, Logger};
use std::fs;
use tempfile::TempDir;

#[test]
fn empty_config_uses_defaults() {
    let config = Config::from_toml("").unwrap();
    assert!(config.console.colors);
    assert!(config.webhook.url.is_empty());
    assert!(config.webhook.ping_id.is_empty());
    assert_eq!(config.webhook.workers, 2);
    assert_eq!(config.webhook.queue_capacity, 256);
    assert_eq!(config.webhook.timeout_secs, 30);
    assert!(!config.notifications_enabled());
}

#[test]
fn full_config_parses() {
    let config = Config::from_toml(
        r#"
        [console]
        colors = false

        [webhook]
        url = "https://hook.example/x"
        ping_id = "12345"
        workers = 4
        queue_capacity = 8
        timeout_secs = 5
        "#,
    )
    .unwrap();

    assert!(!config.console.colors);
    assert_eq!(config.webhook.url, "https://hook.example/x");
    assert_eq!(config.webhook.ping_id, "12345");
    assert_eq!(config.webhook.workers, 4);
    assert_eq!(config.webhook.queue_capacity, 8);
    assert_eq!(config.webhook.timeout_secs, 5);
    assert!(config.notifications_enabled());
}

#[test]
fn partial_section_keeps_other_defaults() {
    let config = Config::from_toml("[webhook]\nurl = \"https://hook.example/x\"\n").unwrap();
    assert_eq!(config.webhook.workers, 2);
    assert!(!config.notifications_enabled());
}

#[test]
fn invalid_toml_is_a_parse_error() {
    let err = Config::from_toml("[webhook\nurl = ").unwrap_err();
    assert!(matches!(err, hooklog::Error::ConfigParse(_)));
}

#[test]
fn wrong_type_is_a_parse_error() {
    let err = Config::from_toml("[webhook]\nworkers = \"many\"\n").unwrap_err();
    assert!(matches!(err, hooklog::Error::ConfigParse(_)));
}

#[test]
fn missing_file_yields_defaults() {
    let tmp_dir = TempDir::new().unwrap();
    let config = Config::load_from(&tmp_dir.path().join("absent.toml")).unwrap();
    assert!(!config.notifications_enabled());
}

#[test]
fn load_from_reads_file() {
    let tmp_dir = TempDir::new().unwrap();
    let path = tmp_dir.path().join("hooklog.toml");
    fs::write(
        &path,
        "[webhook]\nurl = \"https://hook.example/x\"\nping_id = \"7\"\n",
    )
    .unwrap();

    let config = Config::load_from(&path).unwrap();
    assert!(config.notifications_enabled());
    assert_eq!(config.webhook.ping_id, "7");
}

#[test]
fn default_path_is_under_hooklog_dir() {
    let path = Config::get_config_path().unwrap();
    assert!(path.ends_with("hooklog/hooklog.toml"));
}

#[test]
fn logger_from_config_applies_settings() {
    let config = Config::from_toml(
        r#"
        [console]
        colors = false

        [webhook]
        url = "https://hook.example/x"
        ping_id = "12345"
        "#,
    )
    .unwrap();

    let transport = RecordingTransport::new();
    let buf = SharedBuf::new();
    let logger = config
        .builder()
        .writer(buf.clone())
        .transport(transport.clone())
        .build();

    assert!(logger.notifications_enabled());
    logger.panic_and_notify("from config");
    logger.close();

    assert!(!buf.contents().contains('\x1b'));
    assert_eq!(
        transport.requests()[0].body_str(),
        r#"{"content":"<@12345> from config"}"#
    );
}

#[test]
fn logger_from_config_without_webhook_is_disabled() {
    let logger = Logger::from_config(&Config::default());
    assert!(!logger.notifications_enabled());
}
