//! Every diagnostic command the collectors issue (macOS tool output formats).

pub const MEM_TOTAL: &str = "sysctl -n hw.memsize";
pub const VM_STAT: &str = "vm_stat";
pub const CPU_USAGE: &str = "top -l 1 -n 0 | grep 'CPU usage'";
pub const HARDWARE_PORTS: &str = "networksetup -listallhardwareports";
pub const AIRPORT_SUMMARY: &str = "system_profiler SPAirPortDataType";
pub const BLUETOOTH: &str = "system_profiler SPBluetoothDataType";
pub const BATTERY: &str = "pmset -g batt";
pub const LISTENING_PORTS: &str = "lsof -iTCP -sTCP:LISTEN -n -P";
pub const TOP_PROCESSES: &str = "ps aux -r";
pub const HOSTNAME: &str = "hostname";
pub const OS_VERSION: &str = "sw_vers -productName; sw_vers -productVersion";
pub const UPTIME: &str = "uptime";
pub const DISK_ROOT: &str = "df -h /";

/// Current network of one wireless interface.
pub fn airport_network(iface: &str) -> String {
    format!("networksetup -getairportnetwork {iface}")
}

/// Interface names are spliced into a shell line, so only plain identifiers pass.
pub fn is_safe_iface(iface: &str) -> bool {
    !iface.is_empty()
        && iface.len() <= 32
        && iface
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'))
}
