//! Snapshot records handed from the collectors to the presentation layer.
//! Every field has a renderable placeholder; `Default` is each record's all-defaults form.

use serde::{Deserialize, Serialize};

/// Placeholder for any string field that could not be determined.
pub const PLACEHOLDER: &str = "N/A";

fn placeholder() -> String {
    PLACEHOLDER.to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemoryReading {
    pub total: String,
    pub used: String,
    pub free: String,
    pub percent: u8,
}

impl Default for MemoryReading {
    fn default() -> Self {
        Self {
            total: placeholder(),
            used: placeholder(),
            free: placeholder(),
            percent: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CpuReading {
    pub user: f64,
    pub system: f64,
    pub idle: f64,
    // round(user + system), clamped
    pub usage: u8,
}

impl Default for CpuReading {
    fn default() -> Self {
        Self {
            user: 0.0,
            system: 0.0,
            idle: 100.0,
            usage: 0,
        }
    }
}

pub const WIFI_DISCONNECTED: &str = "Disconnected";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WifiReading {
    pub connected: bool,
    pub network: String,
}

impl WifiReading {
    pub fn disconnected() -> Self {
        Self {
            connected: false,
            network: WIFI_DISCONNECTED.to_string(),
        }
    }

    pub fn connected(network: impl Into<String>) -> Self {
        Self {
            connected: true,
            network: network.into(),
        }
    }
}

impl Default for WifiReading {
    fn default() -> Self {
        Self::disconnected()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BluetoothReading {
    pub enabled: bool,
    pub devices: Vec<String>,
}

pub const POWER_SOURCE_UNKNOWN: &str = "Unknown";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatteryReading {
    /// -1 when unknown, else 0..=100.
    pub percent: i8,
    pub charging: bool,
    pub source: String,
}

impl BatteryReading {
    pub fn is_known(&self) -> bool {
        self.percent >= 0
    }

    /// "85%" or the placeholder; never renders the -1 sentinel.
    pub fn percent_label(&self) -> String {
        if self.is_known() {
            format!("{}%", self.percent)
        } else {
            placeholder()
        }
    }
}

impl Default for BatteryReading {
    fn default() -> Self {
        Self {
            percent: -1,
            charging: false,
            source: POWER_SOURCE_UNKNOWN.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortEntry {
    pub port: String,
    pub process: String,
    pub pid: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessEntry {
    pub pid: String,
    pub name: String,
    pub cpu: String,
    pub mem: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiskReading {
    pub total: String,
    pub used: String,
    pub available: String,
    pub percent: u8,
}

impl Default for DiskReading {
    fn default() -> Self {
        Self {
            total: placeholder(),
            used: placeholder(),
            available: placeholder(),
            percent: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostInfo {
    pub hostname: String,
    pub os: String,
    pub uptime: String,
    pub disk: DiskReading,
}

impl Default for HostInfo {
    fn default() -> Self {
        Self {
            hostname: placeholder(),
            os: placeholder(),
            uptime: placeholder(),
            disk: DiskReading::default(),
        }
    }
}

/// One full collection cycle. Built at once by the aggregator and replaced wholesale.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub memory: MemoryReading,
    pub cpu: CpuReading,
    pub wifi: WifiReading,
    pub bluetooth: BluetoothReading,
    pub battery: BatteryReading,
    pub ports: Vec<PortEntry>,
    pub processes: Vec<ProcessEntry>,
    pub host: HostInfo,
    pub collected_at: String,
}
