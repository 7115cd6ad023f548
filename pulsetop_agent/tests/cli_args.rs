//! CLI tests for pulsetop_agent.

use assert_cmd::Command;

#[test]
fn help_mentions_flags() {
    let out = Command::cargo_bin("pulsetop_agent")
        .unwrap()
        .arg("--help")
        .output()
        .expect("run pulsetop_agent --help");
    assert!(out.status.success());
    let text = String::from_utf8_lossy(&out.stderr);
    assert!(text.contains("Usage:"), "{text}");
    assert!(text.contains("--once") && text.contains("--interval") && text.contains("-w"));
}

#[test]
fn demo_once_prints_snapshot_json() {
    let td = tempfile::tempdir().unwrap();
    let out = Command::cargo_bin("pulsetop_agent")
        .unwrap()
        .env("XDG_CONFIG_HOME", td.path())
        .args(["--demo", "--once"])
        .output()
        .expect("run pulsetop_agent --demo --once");
    assert!(out.status.success());
    let v: serde_json::Value = serde_json::from_slice(&out.stdout).expect("json snapshot");
    assert_eq!(v["host"]["hostname"], "studio.local");
    assert_eq!(v["wifi"]["network"], "Home-5G");
    assert_eq!(v["battery"]["percent"], 85);
}

#[test]
fn bad_interval_is_reported() {
    let out = Command::cargo_bin("pulsetop_agent")
        .unwrap()
        .args(["--interval", "never", "--once", "--demo"])
        .output()
        .unwrap();
    assert!(String::from_utf8_lossy(&out.stderr).contains("invalid interval"));
}
