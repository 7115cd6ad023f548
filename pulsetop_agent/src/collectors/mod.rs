//! Per-metric collectors. Each shells out through a `CommandRunner`, parses the text
//! and always hands back a complete reading; failures are absorbed in `guarded`.

pub mod battery;
pub mod bluetooth;
pub mod commands;
pub mod cpu;
pub mod host;
pub mod memory;
pub mod ports;
pub mod processes;
pub mod wifi;

use std::future::Future;
use std::panic::AssertUnwindSafe;

use futures::FutureExt;
use thiserror::Error;
use tracing::debug;

use crate::runner::{is_unavailable, CommandRunner};

#[derive(Debug, Error)]
pub enum CollectError {
    #[error("`{command}` produced no usable output")]
    Unavailable { command: String },
    #[error("could not parse {field} from {raw:?}")]
    Parse { field: &'static str, raw: String },
}

pub type CollectResult<T> = Result<T, CollectError>;

/// Run `command`, treating the unavailable sentinel as an error.
pub(crate) async fn run_required(
    runner: &dyn CommandRunner,
    command: &str,
) -> CollectResult<String> {
    let out = runner.run(command).await;
    if is_unavailable(&out) {
        return Err(CollectError::Unavailable {
            command: command.to_string(),
        });
    }
    Ok(out)
}

/// Drive one collector to completion. An error or a panic inside it yields the
/// record's all-defaults form instead; nothing escapes.
pub async fn guarded<T, F>(collector: &'static str, fut: F) -> T
where
    T: Default,
    F: Future<Output = CollectResult<T>>,
{
    match AssertUnwindSafe(fut).catch_unwind().await {
        Ok(Ok(v)) => v,
        Ok(Err(e)) => {
            debug!(collector, error = %e, "collector fell back to defaults");
            T::default()
        }
        Err(_) => {
            debug!(collector, "collector panicked; using defaults");
            T::default()
        }
    }
}
