//! Refresh scheduler: collects once at startup, then on every timer tick and on
//! manual request, publishing each finished snapshot into `SamplerState`.
//!
//! At most one collection cycle runs at a time. A tick that lands during a cycle
//! is skipped; a manual refresh during a cycle queues exactly one follow-up.

use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures::FutureExt;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};
use tracing::{debug, info, warn};

use crate::aggregator::collect_snapshot;
use crate::config::AgentConfig;
use crate::runner::CommandRunner;
use crate::state::{SamplerState, SharedSnapshot};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Collecting,
}

pub struct Sampler {
    state: Arc<SamplerState>,
    shutdown_tx: watch::Sender<bool>,
    driver: Option<JoinHandle<()>>,
}

/// Start the driver task. Must be called inside a Tokio runtime.
pub fn spawn_sampler(runner: Arc<dyn CommandRunner>, config: AgentConfig) -> Sampler {
    let state = Arc::new(SamplerState::new());
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let driver = tokio::spawn(drive(runner, config, Arc::clone(&state), shutdown_rx));
    Sampler {
        state,
        shutdown_tx,
        driver: Some(driver),
    }
}

impl Sampler {
    pub fn latest(&self) -> SharedSnapshot {
        self.state.latest()
    }

    pub fn subscribe(&self) -> watch::Receiver<SharedSnapshot> {
        self.state.subscribe()
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    pub fn phase(&self) -> Phase {
        if self.state.is_in_flight() {
            Phase::Collecting
        } else {
            Phase::Idle
        }
    }

    pub fn published(&self) -> u64 {
        self.state.published()
    }

    pub fn state(&self) -> Arc<SamplerState> {
        Arc::clone(&self.state)
    }

    /// Manual refresh: latch the loading flag and collect as soon as possible.
    pub fn refresh(&self) {
        self.state.mark_loading();
        self.state.wake.notify_one();
    }

    /// Stop future ticks and wait for the driver to exit. A cycle already running
    /// finishes in the background and its result is dropped.
    pub async fn shutdown(mut self) {
        let _ = self.shutdown_tx.send(true);
        if let Some(driver) = self.driver.take() {
            let _ = driver.await;
        }
    }
}

impl Drop for Sampler {
    fn drop(&mut self) {
        let _ = self.shutdown_tx.send(true);
    }
}

async fn drive(
    runner: Arc<dyn CommandRunner>,
    config: AgentConfig,
    state: Arc<SamplerState>,
    mut shutdown: watch::Receiver<bool>,
) {
    info!(interval_ms = config.interval.as_millis() as u64, "sampler started");
    let (done_tx, mut done_rx) = mpsc::channel(4);
    // first tick fires immediately: that is the startup collection
    let mut ticker = interval(config.interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let mut queued = false;

    loop {
        tokio::select! {
            biased;
            _ = shutdown.changed() => break,
            Some(result) = done_rx.recv() => {
                state.finish_cycle(result, queued);
                if queued && state.try_begin_cycle() {
                    queued = false;
                    start_cycle(&runner, &config, &done_tx);
                }
            }
            _ = ticker.tick() => {
                if state.try_begin_cycle() {
                    start_cycle(&runner, &config, &done_tx);
                } else {
                    debug!("tick skipped: collection still in flight");
                }
            }
            _ = state.wake.notified() => {
                state.mark_loading();
                if state.try_begin_cycle() {
                    start_cycle(&runner, &config, &done_tx);
                } else {
                    queued = true;
                }
            }
        }
    }
    info!("sampler stopped");
}

fn start_cycle(
    runner: &Arc<dyn CommandRunner>,
    config: &AgentConfig,
    done: &mpsc::Sender<Option<crate::types::Snapshot>>,
) {
    let runner = Arc::clone(runner);
    let config = config.clone();
    let done = done.clone();
    tokio::spawn(async move {
        let result = AssertUnwindSafe(collect_snapshot(runner.as_ref(), &config))
            .catch_unwind()
            .await;
        let snapshot = match result {
            Ok(s) => Some(s),
            Err(_) => {
                warn!("collection cycle failed; keeping previous snapshot");
                None
            }
        };
        // after shutdown nobody is listening and the result is discarded
        let _ = done.send(snapshot).await;
    });
}
