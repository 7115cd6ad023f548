//! Fan out every collector at once and assemble one snapshot.

use chrono::Local;

use crate::collectors::{battery, bluetooth, cpu, host, memory, ports, processes, wifi};
use crate::config::AgentConfig;
use crate::runner::CommandRunner;
use crate::types::Snapshot;

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Collectors never fail outward, so this always yields a fully populated snapshot.
pub async fn collect_snapshot(runner: &dyn CommandRunner, config: &AgentConfig) -> Snapshot {
    let (memory, cpu, wifi, bluetooth, battery, ports, processes, host) = tokio::join!(
        memory::collect(runner, config),
        cpu::collect(runner, config),
        wifi::collect(runner, config),
        bluetooth::collect(runner, config),
        battery::collect(runner, config),
        ports::collect(runner, config),
        processes::collect(runner, config),
        host::collect(runner, config),
    );
    Snapshot {
        memory,
        cpu,
        wifi,
        bluetooth,
        battery,
        ports,
        processes,
        host,
        collected_at: timestamp_label(),
    }
}

pub fn timestamp_label() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}
