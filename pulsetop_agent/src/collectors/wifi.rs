//! WiFi: per-interface network query, with the system_profiler summary as fallback.
//!
//! The interface query names the network precisely but is sometimes empty; the
//! summary is reliable about connection state but may redact the network name.

use super::{commands, guarded, CollectResult};
use crate::config::AgentConfig;
use crate::extract::Field;
use crate::runner::CommandRunner;
use crate::types::WifiReading;

/// Shown when connected but the only name we have is redacted.
pub const REDACTED_LABEL: &str = "Connected";

static WIFI_DEVICE: Field = Field::new(
    "wifi device",
    r"Hardware Port:\s*(?:Wi-Fi|AirPort)\s*\r?\nDevice:\s*([A-Za-z0-9_.-]+)",
);
static CURRENT_NETWORK: Field =
    Field::new("current network", r"Current (?:Wi-Fi|AirPort) Network:\s*(.+)");
static SUMMARY_CONNECTED: Field = Field::new("status", r"Status:\s*(Connected)");
static SUMMARY_NETWORK: Field = Field::new(
    "summary network",
    r"Current Network Information:\s*\r?\n\s*([^\r\n]+?):\s*(?:\r?\n|$)",
);

pub async fn collect(runner: &dyn CommandRunner, config: &AgentConfig) -> WifiReading {
    guarded("wifi", read(runner, config)).await
}

async fn read(runner: &dyn CommandRunner, config: &AgentConfig) -> CollectResult<WifiReading> {
    let primary = async {
        let ports = runner.run(commands::HARDWARE_PORTS).await;
        let iface = detect_interface(&ports, &config.wifi_interface);
        runner.run(&commands::airport_network(&iface)).await
    };
    let (primary, secondary) = tokio::join!(primary, runner.run(commands::AIRPORT_SUMMARY));
    Ok(resolve(&primary, &secondary))
}

/// Wireless device name from the hardware ports listing, else `fallback`.
pub fn detect_interface(ports_listing: &str, fallback: &str) -> String {
    WIFI_DEVICE
        .text(ports_listing)
        .filter(|d| commands::is_safe_iface(d))
        .unwrap_or(fallback)
        .to_string()
}

/// Precedence: interface query name, then summary (name or generic label), else disconnected.
pub fn resolve(primary: &str, secondary: &str) -> WifiReading {
    if let Some(name) = CURRENT_NETWORK.text(primary) {
        return WifiReading::connected(name);
    }
    if SUMMARY_CONNECTED.is_match(secondary) {
        let name = SUMMARY_NETWORK
            .text(secondary)
            .filter(|n| !looks_redacted(n))
            .unwrap_or(REDACTED_LABEL);
        return WifiReading::connected(name);
    }
    WifiReading::disconnected()
}

fn looks_redacted(name: &str) -> bool {
    let n = name.trim().to_ascii_lowercase();
    n.is_empty() || n.contains("redacted") || n == "unknown" || n.starts_with('<')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demo;

    const NOT_ASSOCIATED: &str = "You are not associated with an AirPort network.";

    #[test]
    fn detects_wifi_device() {
        assert_eq!(detect_interface(demo::HARDWARE_PORTS_OUTPUT, "en9"), "en0");
        assert_eq!(detect_interface("Hardware Port: Ethernet\nDevice: en5\n", "en9"), "en9");
        assert_eq!(detect_interface(crate::runner::UNAVAILABLE, "en9"), "en9");
    }

    #[test]
    fn primary_name_wins() {
        let w = resolve("Current Wi-Fi Network: Home-5G", demo::AIRPORT_SUMMARY_OUTPUT);
        assert_eq!(w, WifiReading::connected("Home-5G"));
    }

    #[test]
    fn summary_name_used_when_primary_empty() {
        let w = resolve(NOT_ASSOCIATED, demo::AIRPORT_SUMMARY_OUTPUT);
        assert_eq!(w, WifiReading::connected("Home-5G"));
    }

    #[test]
    fn redacted_summary_name_becomes_generic_label() {
        let summary = "Wi-Fi:\n\n  Interfaces:\n    en0:\n      Status: Connected\n      Current Network Information:\n        <redacted>:\n          PHY Mode: 802.11ax\n";
        let w = resolve(NOT_ASSOCIATED, summary);
        assert_eq!(w, WifiReading::connected(REDACTED_LABEL));
    }

    #[test]
    fn disconnected_when_neither_source_reports() {
        let w = resolve(NOT_ASSOCIATED, "Wi-Fi:\n  Status: Off\n");
        assert!(!w.connected);
        assert_eq!(w.network, crate::types::WIFI_DISCONNECTED);
        let w = resolve(crate::runner::UNAVAILABLE, crate::runner::UNAVAILABLE);
        assert_eq!(w, WifiReading::disconnected());
    }
}
