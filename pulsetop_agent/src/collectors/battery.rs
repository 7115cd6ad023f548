//! Battery: pmset percentage, charge state and power source.

use super::{commands, guarded, CollectResult};
use crate::config::AgentConfig;
use crate::extract::Field;
use crate::runner::CommandRunner;
use crate::types::{BatteryReading, POWER_SOURCE_UNKNOWN};

static PERCENT: Field = Field::new("battery percent", r"(\d{1,3})%");
// word boundary keeps "discharging" out
static CHARGING: Field = Field::new(
    "charging",
    r"(?i)(AC Power|\bcharging\b|\bcharged\b|\bfinishing charge\b)",
);
static SOURCE: Field = Field::new("power source", r"drawing from '([^']+)'");

pub async fn collect(runner: &dyn CommandRunner, _config: &AgentConfig) -> BatteryReading {
    guarded("battery", read(runner)).await
}

async fn read(runner: &dyn CommandRunner) -> CollectResult<BatteryReading> {
    Ok(parse(&runner.run(commands::BATTERY).await))
}

pub fn parse(text: &str) -> BatteryReading {
    BatteryReading {
        percent: PERCENT
            .integer(text)
            .map(|p| p.min(100) as i8)
            .unwrap_or(-1),
        charging: CHARGING.is_match(text),
        source: SOURCE.text(text).unwrap_or(POWER_SOURCE_UNKNOWN).to_string(),
    }
}
