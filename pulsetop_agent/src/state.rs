//! Shared sampler state: the published snapshot and the loading / in-flight flags.
//! Only the sampler's driver task writes here; readers only ever see whole snapshots.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::{watch, Notify};

use crate::types::Snapshot;

pub type SharedSnapshot = Option<Arc<Snapshot>>;

pub struct SamplerState {
    snapshot: watch::Sender<SharedSnapshot>,
    loading: AtomicBool,
    in_flight: AtomicBool,
    published: AtomicU64,
    // manual refresh requests
    pub(crate) wake: Notify,
}

impl SamplerState {
    pub fn new() -> Self {
        let (snapshot, _) = watch::channel(None);
        Self {
            snapshot,
            loading: AtomicBool::new(false),
            in_flight: AtomicBool::new(false),
            published: AtomicU64::new(0),
            wake: Notify::new(),
        }
    }

    pub fn latest(&self) -> SharedSnapshot {
        self.snapshot.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<SharedSnapshot> {
        self.snapshot.subscribe()
    }

    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::Acquire)
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Snapshots published so far.
    pub fn published(&self) -> u64 {
        self.published.load(Ordering::Acquire)
    }

    pub(crate) fn mark_loading(&self) {
        self.loading.store(true, Ordering::Release);
    }

    /// Claim the single collection slot. False if a cycle is already running.
    pub(crate) fn try_begin_cycle(&self) -> bool {
        if self.in_flight.swap(true, Ordering::AcqRel) {
            return false;
        }
        self.mark_loading();
        true
    }

    /// Publish a finished cycle. `None` keeps the previous snapshot in place.
    pub(crate) fn finish_cycle(&self, result: Option<Snapshot>, more_queued: bool) {
        if let Some(snapshot) = result {
            self.snapshot.send_replace(Some(Arc::new(snapshot)));
            self.published.fetch_add(1, Ordering::AcqRel);
        }
        self.in_flight.store(false, Ordering::Release);
        if !more_queued {
            self.loading.store(false, Ordering::Release);
        }
    }
}

impl Default for SamplerState {
    fn default() -> Self {
        Self::new()
    }
}
