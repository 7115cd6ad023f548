//! Listening TCP sockets from lsof, deduplicated per (port, process).

use std::collections::HashSet;

use super::{commands, guarded, CollectResult};
use crate::config::AgentConfig;
use crate::extract::Field;
use crate::runner::{is_unavailable, CommandRunner};
use crate::types::PortEntry;

/// Raw lsof lines considered per cycle, header included.
pub const RAW_LINE_LIMIT: usize = 15;
pub const MAX_PORTS: usize = 10;

// NAME column, e.g. "*:5000 (LISTEN)" or "[::1]:631 (LISTEN)"
static PORT: Field = Field::new("port", r":(\d+)(?:\s*\(LISTEN\))?\s*$");

pub async fn collect(runner: &dyn CommandRunner, _config: &AgentConfig) -> Vec<PortEntry> {
    guarded("ports", read(runner)).await
}

async fn read(runner: &dyn CommandRunner) -> CollectResult<Vec<PortEntry>> {
    Ok(parse(&runner.run(commands::LISTENING_PORTS).await))
}

pub fn parse(text: &str) -> Vec<PortEntry> {
    if is_unavailable(text) {
        return Vec::new();
    }
    let mut seen: HashSet<(String, String)> = HashSet::new();
    let mut entries = Vec::new();
    for line in text.lines().take(RAW_LINE_LIMIT) {
        let Some(entry) = parse_line(line) else {
            continue;
        };
        if seen.insert((entry.port.clone(), entry.process.clone())) {
            entries.push(entry);
            if entries.len() == MAX_PORTS {
                break;
            }
        }
    }
    entries
}

fn parse_line(line: &str) -> Option<PortEntry> {
    let mut cols = line.split_whitespace();
    let process = cols.next()?;
    let pid = cols.next()?;
    if process == "COMMAND" || !pid.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let port = PORT.text(line)?;
    Some(PortEntry {
        port: port.to_string(),
        process: process.to_string(),
        pid: pid.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demo;

    #[test]
    fn parses_fixture_with_dedupe() {
        let ports = parse(demo::LSOF_OUTPUT);
        let keys: Vec<(&str, &str)> = ports
            .iter()
            .map(|p| (p.port.as_str(), p.process.as_str()))
            .collect();
        assert_eq!(
            keys,
            vec![
                ("5000", "ControlCe"),
                ("7000", "ControlCe"),
                ("631", "cupsd"),
                ("5432", "postgres"),
            ]
        );
        assert_eq!(ports[2].pid, "321");
    }

    #[test]
    fn same_port_and_name_different_pid_is_one_entry() {
        let text = "COMMAND PID USER FD TYPE DEVICE SIZE/OFF NODE NAME\n\
node 100 me 20u IPv4 0x1 0t0 TCP *:3000 (LISTEN)\n\
node 200 me 21u IPv4 0x2 0t0 TCP *:3000 (LISTEN)\n";
        let ports = parse(text);
        assert_eq!(ports.len(), 1);
        assert_eq!(ports[0].pid, "100");
    }

    #[test]
    fn lines_without_port_are_skipped() {
        let text = "COMMAND PID USER FD TYPE DEVICE SIZE/OFF NODE NAME\n\
launchd 1 root 7u unix 0x1 0t0 /var/run/sock\n\
sshd 90 root 3u IPv6 0x2 0t0 TCP *:22 (LISTEN)\n";
        let ports = parse(text);
        assert_eq!(ports.len(), 1);
        assert_eq!(ports[0].port, "22");
    }

    #[test]
    fn caps_at_ten_and_respects_raw_line_limit() {
        let mut text = String::from("COMMAND PID USER FD TYPE DEVICE SIZE/OFF NODE NAME\n");
        for i in 0..30 {
            text.push_str(&format!("svc{i} {} me 3u IPv4 0x0 0t0 TCP *:{} (LISTEN)\n", 1000 + i, 8000 + i));
        }
        let ports = parse(&text);
        assert_eq!(ports.len(), MAX_PORTS);
        assert_eq!(ports[0].port, "8000");

        let mut sparse = String::from("COMMAND PID USER FD TYPE DEVICE SIZE/OFF NODE NAME\n");
        for i in 0..20 {
            // only every 4th line has a port
            let name = if i % 4 == 0 { format!("*:{}", 9000 + i) } else { "/tmp/sock".into() };
            sparse.push_str(&format!("svc{i} {} me 3u IPv4 0x0 0t0 TCP {name}\n", 1000 + i));
        }
        // lines 1..=14 hold i = 0..=13, so ports for i = 0, 4, 8, 12
        assert_eq!(parse(&sparse).len(), 4);
    }
}
