//! CPU: one-shot `top` usage summary line.

use super::{commands, guarded, CollectResult};
use crate::config::AgentConfig;
use crate::extract::{clamp_percent, NumericField};
use crate::runner::CommandRunner;
use crate::types::CpuReading;

static USER: NumericField = NumericField::new("user", r"([\d.]+)%\s*user", 0.0);
static SYSTEM: NumericField = NumericField::new("sys", r"([\d.]+)%\s*sys", 0.0);
static IDLE: NumericField = NumericField::new("idle", r"([\d.]+)%\s*idle", 100.0);

pub async fn collect(runner: &dyn CommandRunner, _config: &AgentConfig) -> CpuReading {
    guarded("cpu", read(runner)).await
}

async fn read(runner: &dyn CommandRunner) -> CollectResult<CpuReading> {
    Ok(parse(&runner.run(commands::CPU_USAGE).await))
}

pub fn parse(text: &str) -> CpuReading {
    let user = USER.read(text);
    let system = SYSTEM.read(text);
    CpuReading {
        user,
        system,
        idle: IDLE.read(text),
        usage: clamp_percent(user + system),
    }
}
