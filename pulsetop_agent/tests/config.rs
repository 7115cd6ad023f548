//! Config file layering (non-interactive, temp dirs only).

use std::fs;
use std::time::Duration;

use pulsetop_agent::config::{read_config_file, DEFAULT_INTERVAL, DEFAULT_WIFI_IFACE};
use pulsetop_agent::AgentConfig;

#[test]
fn missing_file_gives_defaults() {
    let td = tempfile::tempdir().unwrap();
    let cfg = AgentConfig::load_from(&td.path().join("config.json"), |_| None);
    assert_eq!(cfg, AgentConfig::default());
}

#[test]
fn file_values_apply_and_env_wins() {
    let td = tempfile::tempdir().unwrap();
    let path = td.path().join("config.json");
    fs::write(
        &path,
        r#"{ "interval_ms": 1000, "wifi_interface": "en1", "command_timeout_ms": 2500 }"#,
    )
    .unwrap();

    let cfg = AgentConfig::load_from(&path, |_| None);
    assert_eq!(cfg.interval, Duration::from_secs(1));
    assert_eq!(cfg.wifi_interface, "en1");
    assert_eq!(cfg.command_timeout, Duration::from_millis(2500));

    let cfg = AgentConfig::load_from(&path, |k| {
        (k == "PULSETOP_INTERVAL_MS").then(|| "7000".to_string())
    });
    assert_eq!(cfg.interval, Duration::from_secs(7));
    assert_eq!(cfg.wifi_interface, "en1");
}

#[test]
fn partial_file_keeps_other_defaults() {
    let td = tempfile::tempdir().unwrap();
    let path = td.path().join("config.json");
    fs::write(&path, r#"{ "interval_ms": 500 }"#).unwrap();
    let file = read_config_file(&path).unwrap().unwrap();
    assert_eq!(file.interval_ms, Some(500));
    assert_eq!(file.wifi_interface, None);
    let cfg = AgentConfig::load_from(&path, |_| None);
    assert_eq!(cfg.wifi_interface, DEFAULT_WIFI_IFACE);
}

#[test]
fn malformed_file_falls_back_to_defaults() {
    let td = tempfile::tempdir().unwrap();
    let path = td.path().join("config.json");
    fs::write(&path, "{ not json").unwrap();
    assert!(read_config_file(&path).is_err());
    let cfg = AgentConfig::load_from(&path, |_| None);
    assert_eq!(cfg.interval, DEFAULT_INTERVAL);
}
