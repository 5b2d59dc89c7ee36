//! # Recorder – keep every snapshot received
//!
//! Stores the snapshots delivered to it, in delivery order. Useful in tests to
//! assert exactly-once delivery and in displays that only care about the
//! latest value.
//!
//! ## Behavior
//! - Every `receive` appends; nothing is deduplicated.
//! - Reads return copies (`Snapshot` clones share the state `Arc`).

use std::sync::{PoisonError, RwLock};

use crate::error::ObserveError;
use crate::events::Snapshot;
use crate::subscribers::Observe;

/// Records received snapshots.
pub struct Recorder<S> {
    name: &'static str,
    seen: RwLock<Vec<Snapshot<S>>>,
}

impl<S> Recorder<S> {
    #[must_use]
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            seen: RwLock::new(Vec::new()),
        }
    }

    /// Number of snapshots received.
    #[must_use]
    pub fn count(&self) -> usize {
        self.seen.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// Most recent snapshot, if any.
    #[must_use]
    pub fn last(&self) -> Option<Snapshot<S>> {
        self.seen
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .last()
            .cloned()
    }

    /// Every snapshot received, in delivery order.
    #[must_use]
    pub fn history(&self) -> Vec<Snapshot<S>> {
        self.seen.read().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Round numbers received, in delivery order.
    #[must_use]
    pub fn rounds(&self) -> Vec<u64> {
        self.seen
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(Snapshot::round)
            .collect()
    }
}

impl<S: Send + Sync + 'static> Observe<S> for Recorder<S> {
    fn receive(&self, snapshot: &Snapshot<S>) -> Result<(), ObserveError> {
        self.seen
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(snapshot.clone());
        Ok(())
    }

    fn name(&self) -> &'static str {
        self.name
    }
}

impl<S> Default for Recorder<S> {
    fn default() -> Self {
        Self::new("Recorder")
    }
}
