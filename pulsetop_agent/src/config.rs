//! Agent configuration: defaults, then `config.json`, then environment, then CLI.
//! The file lives under $XDG_CONFIG_HOME/pulsetop/config.json (fallback ~/.config/pulsetop).

use std::{fs, path::Path, path::PathBuf, time::Duration};

use anyhow::Context;
use serde::{Deserialize, Serialize};
use tracing::warn;

pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(3);
pub const DEFAULT_COMMAND_TIMEOUT: Duration = Duration::from_secs(5);
pub const DEFAULT_WIFI_IFACE: &str = "en0";
pub const MIN_INTERVAL: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentConfig {
    pub interval: Duration,
    pub command_timeout: Duration,
    /// Used when the hardware ports listing names no wireless device.
    pub wifi_interface: String,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            interval: DEFAULT_INTERVAL,
            command_timeout: DEFAULT_COMMAND_TIMEOUT,
            wifi_interface: DEFAULT_WIFI_IFACE.to_string(),
        }
    }
}

/// On-disk form; every key optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigFile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval_ms: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command_timeout_ms: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wifi_interface: Option<String>,
}

pub fn config_dir() -> PathBuf {
    if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
        PathBuf::from(xdg).join("pulsetop")
    } else {
        dirs_next::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("pulsetop")
    }
}

pub fn config_path() -> PathBuf {
    config_dir().join("config.json")
}

pub fn read_config_file(path: &Path) -> anyhow::Result<Option<ConfigFile>> {
    let s = match fs::read_to_string(path) {
        Ok(s) => s,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e).with_context(|| format!("reading {}", path.display())),
    };
    let file = serde_json::from_str(&s).with_context(|| format!("parsing {}", path.display()))?;
    Ok(Some(file))
}

impl AgentConfig {
    /// Defaults + config file + process environment.
    pub fn load() -> Self {
        Self::load_from(&config_path(), |k| std::env::var(k).ok())
    }

    pub fn load_from(path: &Path, env: impl Fn(&str) -> Option<String>) -> Self {
        let mut cfg = Self::default();
        match read_config_file(path) {
            Ok(Some(file)) => cfg.apply_file(&file),
            Ok(None) => {}
            Err(e) => warn!("ignoring config file: {e:#}"),
        }
        cfg.apply_env(env);
        cfg.normalized()
    }

    pub fn apply_file(&mut self, file: &ConfigFile) {
        if let Some(ms) = file.interval_ms {
            self.interval = Duration::from_millis(ms);
        }
        if let Some(ms) = file.command_timeout_ms {
            self.command_timeout = Duration::from_millis(ms);
        }
        if let Some(iface) = file.wifi_interface.as_ref() {
            self.wifi_interface = iface.clone();
        }
    }

    pub fn apply_env(&mut self, env: impl Fn(&str) -> Option<String>) {
        if let Some(ms) = env("PULSETOP_INTERVAL_MS").and_then(|v| v.parse().ok()) {
            self.interval = Duration::from_millis(ms);
        }
        if let Some(ms) = env("PULSETOP_COMMAND_TIMEOUT_MS").and_then(|v| v.parse().ok()) {
            self.command_timeout = Duration::from_millis(ms);
        }
        if let Some(iface) = env("PULSETOP_WIFI_IFACE").filter(|v| !v.trim().is_empty()) {
            self.wifi_interface = iface.trim().to_string();
        }
    }

    /// Clamp intervals to sane minimums and reject unsafe interface names.
    pub fn normalized(mut self) -> Self {
        self.interval = self.interval.max(MIN_INTERVAL);
        self.command_timeout = self.command_timeout.max(MIN_INTERVAL);
        if !crate::collectors::commands::is_safe_iface(&self.wifi_interface) {
            warn!(iface = %self.wifi_interface, "invalid wifi interface, using default");
            self.wifi_interface = DEFAULT_WIFI_IFACE.to_string();
        }
        self
    }
}

/// Values given on the command line; they win over every other layer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub interval: Option<Duration>,
    pub wifi_interface: Option<String>,
}

impl AgentConfig {
    pub fn with_overrides(mut self, o: &Overrides) -> Self {
        if let Some(i) = o.interval {
            self.interval = i;
        }
        if let Some(iface) = o.wifi_interface.as_ref() {
            self.wifi_interface = iface.clone();
        }
        self.normalized()
    }
}

/// Parse a `--interval` value given in (possibly fractional) seconds.
pub fn parse_interval_secs(v: &str) -> Result<Duration, String> {
    v.trim()
        .parse::<f64>()
        .ok()
        .filter(|s| *s > 0.0)
        .and_then(|s| Duration::try_from_secs_f64(s).ok())
        .ok_or_else(|| format!("invalid interval '{v}': expected seconds, e.g. 3 or 0.5"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_overrides_defaults() {
        let mut cfg = AgentConfig::default();
        cfg.apply_env(|k| match k {
            "PULSETOP_INTERVAL_MS" => Some("1500".into()),
            "PULSETOP_WIFI_IFACE" => Some(" en1 ".into()),
            "PULSETOP_COMMAND_TIMEOUT_MS" => Some("nope".into()),
            _ => None,
        });
        assert_eq!(cfg.interval, Duration::from_millis(1500));
        assert_eq!(cfg.wifi_interface, "en1");
        assert_eq!(cfg.command_timeout, DEFAULT_COMMAND_TIMEOUT);
    }

    #[test]
    fn normalization_clamps_and_sanitizes() {
        let cfg = AgentConfig {
            interval: Duration::ZERO,
            command_timeout: Duration::from_millis(1),
            wifi_interface: "en0 && reboot".into(),
        }
        .normalized();
        assert_eq!(cfg.interval, MIN_INTERVAL);
        assert_eq!(cfg.command_timeout, MIN_INTERVAL);
        assert_eq!(cfg.wifi_interface, DEFAULT_WIFI_IFACE);
    }

    #[test]
    fn interval_flag_parsing() {
        assert_eq!(parse_interval_secs("3"), Ok(Duration::from_secs(3)));
        assert_eq!(parse_interval_secs("0.5"), Ok(Duration::from_millis(500)));
        assert!(parse_interval_secs("0").is_err());
        assert!(parse_interval_secs("-1").is_err());
        assert!(parse_interval_secs("soon").is_err());
    }

    #[test]
    fn overrides_win() {
        let cfg = AgentConfig::default().with_overrides(&Overrides {
            interval: Some(Duration::from_secs(10)),
            wifi_interface: Some("en2".into()),
        });
        assert_eq!(cfg.interval, Duration::from_secs(10));
        assert_eq!(cfg.wifi_interface, "en2");
    }
}
