//! Top processes by CPU from `ps aux -r`, minus the listing itself.

use super::{commands, guarded, CollectResult};
use crate::config::AgentConfig;
use crate::extract::truncate_ellipsis;
use crate::runner::{is_unavailable, CommandRunner};
use crate::types::ProcessEntry;

pub const MAX_PROCESSES: usize = 6;
pub const NAME_MAX: usize = 30;
// rows containing this are our own `ps` invocation
const SELF_MARKER: &str = "ps aux";
// USER PID %CPU %MEM VSZ RSS TT STAT STARTED TIME COMMAND
const COMMAND_COL: usize = 10;

pub async fn collect(runner: &dyn CommandRunner, _config: &AgentConfig) -> Vec<ProcessEntry> {
    guarded("processes", read(runner)).await
}

async fn read(runner: &dyn CommandRunner) -> CollectResult<Vec<ProcessEntry>> {
    Ok(parse(&runner.run(commands::TOP_PROCESSES).await))
}

pub fn parse(text: &str) -> Vec<ProcessEntry> {
    if is_unavailable(text) {
        return Vec::new();
    }
    text.lines()
        .skip(1)
        .filter_map(parse_row)
        .take(MAX_PROCESSES)
        .collect()
}

fn parse_row(line: &str) -> Option<ProcessEntry> {
    let cols: Vec<&str> = line.split_whitespace().collect();
    if cols.len() <= COMMAND_COL {
        return None;
    }
    let command = cols[COMMAND_COL..].join(" ");
    if command.contains(SELF_MARKER) {
        return None;
    }
    Some(ProcessEntry {
        pid: cols[1].to_string(),
        name: truncate_ellipsis(short_command(&command), NAME_MAX),
        cpu: cols[2].to_string(),
        mem: cols[3].to_string(),
    })
}

/// Drop the executable's directory, keeping its arguments.
fn short_command(command: &str) -> &str {
    let exe_end = command.find(" -").unwrap_or(command.len());
    match command[..exe_end].rfind('/') {
        Some(i) => &command[i + 1..],
        None => command,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demo;

    #[test]
    fn parses_fixture_skipping_header_and_self() {
        let procs = parse(demo::PS_OUTPUT);
        assert_eq!(procs.len(), MAX_PROCESSES);
        assert_eq!(procs[0].pid, "812");
        assert_eq!(procs[0].name, "WindowServer -daemon");
        assert_eq!(procs[0].cpu, "23.4");
        assert_eq!(procs[0].mem, "1.2");
        assert!(procs.iter().all(|p| !p.name.contains("ps aux")));
        assert!(procs.iter().all(|p| p.pid != "PID"));
    }

    #[test]
    fn self_listing_row_is_excluded() {
        let text = "USER PID %CPU %MEM VSZ RSS TT STAT STARTED TIME COMMAND\n\
me 900 50.0 0.1 1 1 ?? R 9:00AM 0:00.01 ps aux -r\n\
me 901 10.0 0.1 1 1 ?? S 9:00AM 0:00.01 /bin/zsh -l\n";
        let procs = parse(text);
        assert_eq!(procs.len(), 1);
        assert_eq!(procs[0].name, "zsh -l");
    }

    #[test]
    fn long_names_are_truncated() {
        let text = "USER PID %CPU %MEM VSZ RSS TT STAT STARTED TIME COMMAND\n\
me 1 1.0 0.1 1 1 ?? S 9:00AM 0:00.01 /Applications/Google Chrome.app/Contents/Frameworks/Google Chrome Helper (Renderer).app/Contents/MacOS/Google Chrome Helper (Renderer) --type=renderer\n";
        let procs = parse(text);
        assert_eq!(procs[0].name.chars().count(), NAME_MAX);
        assert!(procs[0].name.starts_with("Google Chrome Helper"));
        assert!(procs[0].name.ends_with("..."));
    }

    #[test]
    fn short_rows_are_ignored() {
        assert!(parse("USER PID\nme 1 2.0").is_empty());
    }
}
