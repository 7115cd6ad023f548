//! Bluetooth: controller state plus the names listed under the "Connected:" section.

use super::{commands, guarded, CollectResult};
use crate::config::AgentConfig;
use crate::extract::Field;
use crate::runner::{is_unavailable, CommandRunner};
use crate::types::BluetoothReading;

static STATE: Field = Field::new("bluetooth state", r"State:\s*(On|Off)");
const SECTION: &str = "Connected:";

pub async fn collect(runner: &dyn CommandRunner, _config: &AgentConfig) -> BluetoothReading {
    guarded("bluetooth", read(runner)).await
}

async fn read(runner: &dyn CommandRunner) -> CollectResult<BluetoothReading> {
    Ok(parse(&runner.run(commands::BLUETOOTH).await))
}

pub fn parse(text: &str) -> BluetoothReading {
    BluetoothReading {
        enabled: STATE.text(text) == Some("On"),
        devices: connected_devices(text),
    }
}

/// Device names one indent level below the "Connected:" header. The block ends at
/// the first blank line or at a line indented no deeper than the header.
pub fn connected_devices(text: &str) -> Vec<String> {
    if is_unavailable(text) {
        return Vec::new();
    }
    let mut lines = text.lines();
    let Some(header_indent) = lines
        .by_ref()
        .find(|l| l.trim() == SECTION)
        .map(indent_of)
    else {
        return Vec::new();
    };

    let mut devices = Vec::new();
    let mut device_indent: Option<usize> = None;
    for line in lines {
        if line.trim().is_empty() {
            if device_indent.is_some() {
                break;
            }
            continue;
        }
        let indent = indent_of(line);
        if indent <= header_indent {
            break;
        }
        if indent == *device_indent.get_or_insert(indent) {
            let name = line.trim().trim_end_matches(':').trim();
            if !name.is_empty() {
                devices.push(name.to_string());
            }
        }
    }
    devices
}

fn indent_of(line: &str) -> usize {
    line.len() - line.trim_start().len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demo;

    #[test]
    fn parses_fixture() {
        let b = parse(demo::BLUETOOTH_OUTPUT);
        assert!(b.enabled);
        assert_eq!(b.devices, vec!["AirPods Pro", "MX Master 3"]);
    }

    #[test]
    fn off_and_no_section() {
        let b = parse("Bluetooth:\n  Bluetooth Controller:\n    State: Off\n");
        assert!(!b.enabled);
        assert!(b.devices.is_empty());
    }

    #[test]
    fn block_stops_at_unindented_line() {
        let text = "  Connected:\n    Keyboard:\n      Address: 1\n  Not Connected:\n    Trackpad:\n";
        assert_eq!(connected_devices(text), vec!["Keyboard"]);
    }

    #[test]
    fn block_stops_at_blank_line() {
        let text = "  Connected:\n\n    Keyboard:\n\n    Ghost:\n";
        assert_eq!(connected_devices(text), vec!["Keyboard"]);
    }

    #[test]
    fn not_connected_header_is_not_the_section() {
        let text = "  Not Connected:\n    Trackpad:\n";
        assert!(connected_devices(text).is_empty());
    }
}
