//! Host identity, uptime and root filesystem usage.

use super::{commands, guarded, CollectResult};
use crate::config::AgentConfig;
use crate::extract::{clamp_percent, Field};
use crate::runner::{is_unavailable, CommandRunner};
use crate::types::{DiskReading, HostInfo, PLACEHOLDER};

pub const UPTIME_FALLBACK_CHARS: usize = 40;

static UPTIME: Field = Field::new("uptime", r"up\s+(.+?),\s+\d+\s+users?");

pub async fn collect(runner: &dyn CommandRunner, _config: &AgentConfig) -> HostInfo {
    guarded("host", read(runner)).await
}

async fn read(runner: &dyn CommandRunner) -> CollectResult<HostInfo> {
    let (hostname, os, uptime, df) = tokio::join!(
        runner.run(commands::HOSTNAME),
        runner.run(commands::OS_VERSION),
        runner.run(commands::UPTIME),
        runner.run(commands::DISK_ROOT),
    );
    Ok(HostInfo {
        hostname: or_placeholder(hostname.trim()),
        os: parse_os(&os),
        uptime: parse_uptime(&uptime),
        disk: parse_disk(&df),
    })
}

fn or_placeholder(s: &str) -> String {
    if is_unavailable(s) {
        PLACEHOLDER.to_string()
    } else {
        s.to_string()
    }
}

/// Product name and version arrive on two lines; join them.
pub fn parse_os(text: &str) -> String {
    if is_unavailable(text) {
        return PLACEHOLDER.to_string();
    }
    text.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn parse_uptime(text: &str) -> String {
    if is_unavailable(text) {
        return PLACEHOLDER.to_string();
    }
    match UPTIME.text(text) {
        Some(up) => up.split_whitespace().collect::<Vec<_>>().join(" "),
        None => text.trim().chars().take(UPTIME_FALLBACK_CHARS).collect(),
    }
}

/// Second line of `df -h /`: filesystem, size, used, avail, capacity, ...
pub fn parse_disk(text: &str) -> DiskReading {
    let Some(line) = text.lines().nth(1) else {
        return DiskReading::default();
    };
    let cols: Vec<&str> = line.split_whitespace().collect();
    if cols.len() < 5 {
        return DiskReading::default();
    }
    let percent = cols[4]
        .trim_end_matches('%')
        .parse::<f64>()
        .map(clamp_percent)
        .unwrap_or(0);
    DiskReading {
        total: cols[1].to_string(),
        used: cols[2].to_string(),
        available: cols[3].to_string(),
        percent,
    }
}
