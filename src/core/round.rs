//! # One notification round.
//!
//! A [`NotificationRound`] pairs a fixed delivery list with the snapshot captured
//! at `notify()` time and delivers it synchronously, in order.
//!
//! ## Rules
//! - The delivery list is an owned copy taken by the subject under its lock;
//!   attach/detach during the round never change it.
//! - Observer `i` returns before observer `i + 1` is called.
//! - Each observer of the list is called at most once per round.
//! - [`DeliveryPolicy::FailFast`]: the first failure ends the round.
//! - [`DeliveryPolicy::CollectAll`]: every observer is called, failures are gathered.
//!
//! ## Panic handling
//! With `catch_panics` the call is wrapped in `catch_unwind`:
//! - the panic becomes a [`DeliveryFailure`] with reason `panicked: <message>`;
//! - it is then handled like any other failure.
//!
//! **Warning**: `AssertUnwindSafe` is used, which can leave observer state inconsistent
//! if the observer panics while holding one of its own locks.

use std::panic::{self, AssertUnwindSafe};

use super::config::DeliveryPolicy;
use crate::error::{DeliveryFailure, NotifyError};
use crate::events::Snapshot;
use crate::subscribers::ObserverHandle;

/// Outcome of a successful round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundReport {
    /// Round number (1-based, per subject).
    pub round: u64,
    /// Number of observers that received the snapshot.
    pub delivered: usize,
}

/// Fixed delivery list plus the snapshot it receives.
pub struct NotificationRound<S> {
    targets: Vec<ObserverHandle<S>>,
    snapshot: Snapshot<S>,
}

impl<S: 'static> NotificationRound<S> {
    /// Creates a round over `targets` (delivery order) for `snapshot`.
    pub fn new(targets: Vec<ObserverHandle<S>>, snapshot: Snapshot<S>) -> Self {
        Self { targets, snapshot }
    }

    /// Round number of the carried snapshot.
    #[inline]
    pub fn round(&self) -> u64 {
        self.snapshot.round()
    }

    /// Number of observers in the fixed delivery list.
    #[inline]
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    /// True if nobody will be notified.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Delivers the snapshot to every target in order.
    pub fn deliver(
        self,
        policy: DeliveryPolicy,
        catch_panics: bool,
    ) -> Result<RoundReport, NotifyError> {
        let round = self.round();
        let mut delivered = 0;
        let mut failures = Vec::new();

        for (position, handle) in self.targets.iter().enumerate() {
            match self.deliver_one(handle, catch_panics) {
                Ok(()) => {
                    delivered += 1;
                    tracing::trace!(round, position, observer = handle.name(), "delivered");
                }
                Err(reason) => {
                    let failure = DeliveryFailure {
                        observer: handle.name(),
                        round,
                        position,
                        reason,
                    };
                    tracing::warn!(
                        round,
                        position,
                        observer = failure.observer,
                        reason = %failure.reason,
                        "delivery failed"
                    );
                    match policy {
                        DeliveryPolicy::FailFast => return Err(NotifyError::Delivery(failure)),
                        DeliveryPolicy::CollectAll => failures.push(failure),
                    }
                }
            }
        }

        if failures.is_empty() {
            Ok(RoundReport { round, delivered })
        } else {
            Err(NotifyError::Collected { round, failures })
        }
    }

    fn deliver_one(&self, handle: &ObserverHandle<S>, catch_panics: bool) -> Result<(), String> {
        if !catch_panics {
            return handle.receive(&self.snapshot).map_err(|e| e.reason().to_owned());
        }
        match panic::catch_unwind(AssertUnwindSafe(|| handle.receive(&self.snapshot))) {
            Ok(res) => res.map_err(|e| e.reason().to_owned()),
            Err(panic_err) => {
                let info = if let Some(msg) = panic_err.downcast_ref::<&'static str>() {
                    (*msg).to_string()
                } else if let Some(msg) = panic_err.downcast_ref::<String>() {
                    msg.clone()
                } else {
                    "unknown panic".to_string()
                };
                Err(format!("panicked: {info}"))
            }
        }
    }
}
