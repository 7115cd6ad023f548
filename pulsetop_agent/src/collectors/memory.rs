//! Memory: physical total from sysctl, free estimate from vm_stat page counts.

use super::{commands, guarded, run_required, CollectError, CollectResult};
use crate::config::AgentConfig;
use crate::extract::{clamp_percent, Field};
use crate::runner::CommandRunner;
use crate::types::MemoryReading;

const DEFAULT_PAGE_SIZE: u64 = 4096;
const GIB: f64 = 1024.0 * 1024.0 * 1024.0;

static PAGE_SIZE: Field = Field::new("page size", r"page size of (\d+) bytes");
// Pages counted as reclaimable when estimating free memory.
static FREE_PAGES: [Field; 3] = [
    Field::new("free pages", r"Pages free:\s+(\d+)"),
    Field::new("inactive pages", r"Pages inactive:\s+(\d+)"),
    Field::new("speculative pages", r"Pages speculative:\s+(\d+)"),
];

pub async fn collect(runner: &dyn CommandRunner, _config: &AgentConfig) -> MemoryReading {
    guarded("memory", read(runner)).await
}

async fn read(runner: &dyn CommandRunner) -> CollectResult<MemoryReading> {
    let (total, vm_stat) = tokio::join!(
        runner.run(commands::MEM_TOTAL),
        run_required(runner, commands::VM_STAT)
    );
    parse(&total, &vm_stat?)
}

pub fn parse(total_raw: &str, vm_stat: &str) -> CollectResult<MemoryReading> {
    let total = total_raw
        .trim()
        .parse::<u64>()
        .ok()
        .filter(|t| *t > 0)
        .ok_or_else(|| CollectError::Parse {
            field: "total memory",
            raw: total_raw.to_string(),
        })?;
    Ok(reading_from(total, estimate_free_bytes(vm_stat)))
}

/// (free + inactive + speculative) pages times the reported page size.
pub fn estimate_free_bytes(vm_stat: &str) -> u64 {
    let page_size = PAGE_SIZE.integer(vm_stat).unwrap_or(DEFAULT_PAGE_SIZE);
    let pages = FREE_PAGES
        .iter()
        .map(|f| f.integer(vm_stat).unwrap_or(0))
        .fold(0u64, u64::saturating_add);
    pages.saturating_mul(page_size)
}

pub fn reading_from(total: u64, free: u64) -> MemoryReading {
    let used = total as f64 - free as f64;
    MemoryReading {
        total: gib(total as f64),
        used: gib(used.max(0.0)),
        free: gib(free as f64),
        percent: clamp_percent(used / total as f64 * 100.0),
    }
}

fn gib(bytes: f64) -> String {
    format!("{:.1} GB", bytes / GIB)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demo;

    #[test]
    fn parses_vm_stat_fixture() {
        let m = parse(demo::MEM_TOTAL_OUTPUT, demo::VM_STAT_OUTPUT).unwrap();
        assert_eq!(m.total, "16.0 GB");
        // (100_000 + 150_000 + 12_144) * 16384 bytes free
        assert_eq!(estimate_free_bytes(demo::VM_STAT_OUTPUT), 262_144 * 16384);
        assert_eq!(m.free, "4.0 GB");
        assert_eq!(m.used, "12.0 GB");
        assert_eq!(m.percent, 75);
    }

    #[test]
    fn non_numeric_total_is_a_whole_record_failure() {
        assert!(parse("N/A", demo::VM_STAT_OUTPUT).is_err());
        assert!(parse("0", demo::VM_STAT_OUTPUT).is_err());
    }

    #[test]
    fn missing_page_size_uses_default() {
        let vm = "Pages free: 10.\nPages inactive: 5.\n";
        assert_eq!(estimate_free_bytes(vm), 15 * DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn percent_always_clamped() {
        let totals = [1u64, 4096, 8 << 30, 64 << 30];
        for &t in &totals {
            for free in [0, t / 3, t, t * 2, u64::MAX / 2] {
                let m = reading_from(t, free);
                assert!(m.percent <= 100);
                if free >= t {
                    assert_eq!(m.percent, 0, "free {free} over total {t}");
                    assert_eq!(m.used, "0.0 GB");
                }
            }
            assert_eq!(reading_from(t, 0).percent, 100);
        }
    }
}
