//! Error types used by subjects, strategy slots and the collaborator capabilities.
//!
//! This module defines the failure side of the engine:
//!
//! - [`ObserveError`]: returned by an observer that could not process a snapshot.
//! - [`DeliveryFailure`]: one failed delivery inside a notification round.
//! - [`NotifyError`]: what [`Subject::notify`](crate::Subject::notify) surfaces to its caller.
//! - [`SlotError`]: strategy catalog and slot misconfiguration.
//! - [`SpawnError`], [`SchedulerError`]: errors of the spawner and scheduler.
//!
//! Registry no-ops (duplicate attach, unknown detach) are **not** errors; see
//! [`AttachOutcome`](crate::AttachOutcome) and [`DetachOutcome`](crate::DetachOutcome).
//!
//! Every enum provides `as_label` (stable snake_case label for logs/metrics).

use thiserror::Error;

/// # Error returned by an observer while processing a snapshot.
///
/// Observers build it from any message; the subject wraps it into a
/// [`DeliveryFailure`] carrying the round and position.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{reason}")]
pub struct ObserveError {
    reason: String,
}

impl ObserveError {
    /// Creates an error with a human-readable reason.
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    /// Returns the reason passed at construction.
    pub fn reason(&self) -> &str {
        &self.reason
    }
}

/// # One failed delivery inside a notification round.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("observer '{observer}' failed in round {round} at position {position}: {reason}")]
pub struct DeliveryFailure {
    /// Name of the observer that failed.
    pub observer: &'static str,
    /// Round number (1-based, per subject).
    pub round: u64,
    /// Index of the observer in the round's fixed delivery order.
    pub position: usize,
    /// Reason reported by the observer (or the panic message).
    pub reason: String,
}

/// # Errors produced by a notification round.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum NotifyError {
    /// Fail-fast policy: the first failure aborted the remaining deliveries.
    #[error("delivery aborted: {0}")]
    Delivery(DeliveryFailure),

    /// Collect-all policy: every observer was visited, some of them failed.
    #[error("{} deliveries failed in round {round}", failures.len())]
    Collected {
        /// Round number.
        round: u64,
        /// Failures in delivery order.
        failures: Vec<DeliveryFailure>,
    },
}

impl NotifyError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use switchyard::{DeliveryFailure, NotifyError};
    ///
    /// let err = NotifyError::Delivery(DeliveryFailure {
    ///     observer: "display",
    ///     round: 1,
    ///     position: 0,
    ///     reason: "screen off".into(),
    /// });
    /// assert_eq!(err.as_label(), "delivery_failure");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            NotifyError::Delivery(_) => "delivery_failure",
            NotifyError::Collected { .. } => "delivery_failures_collected",
        }
    }

    /// Returns every failure carried by this error, in delivery order.
    pub fn failures(&self) -> &[DeliveryFailure] {
        match self {
            NotifyError::Delivery(f) => std::slice::from_ref(f),
            NotifyError::Collected { failures, .. } => failures,
        }
    }
}

/// # Errors produced by strategy slots and catalogs.
///
/// `UnboundSlot` only surfaces while a catalog is being built, so a slot can
/// never be found empty at invocation time.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SlotError {
    /// The catalog has no resolvable default strategy for this slot.
    #[error("slot '{slot}' has no default strategy")]
    UnboundSlot {
        /// Slot kind name.
        slot: &'static str,
    },

    /// No strategy with this name is registered for the slot.
    #[error("slot '{slot}' has no strategy named '{name}'")]
    UnknownStrategy {
        /// Slot kind name.
        slot: &'static str,
        /// Requested strategy name.
        name: String,
    },

    /// The same strategy name was registered twice.
    #[error("slot '{slot}' already has a strategy named '{name}'")]
    DuplicateStrategy {
        /// Slot kind name.
        slot: &'static str,
        /// Strategy name.
        name: String,
    },
}

impl SlotError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use switchyard::SlotError;
    ///
    /// let err = SlotError::UnboundSlot { slot: "voice" };
    /// assert_eq!(err.as_label(), "unbound_slot");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            SlotError::UnboundSlot { .. } => "unbound_slot",
            SlotError::UnknownStrategy { .. } => "unknown_strategy",
            SlotError::DuplicateStrategy { .. } => "duplicate_strategy",
        }
    }
}

/// # Errors produced while configuring an enemy spawner.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SpawnError {
    /// The spawner was configured without any enemy kind to choose from.
    #[error("spawner has no enemy kinds to choose from")]
    NoKinds,
}

impl SpawnError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    pub fn as_label(&self) -> &'static str {
        match self {
            SpawnError::NoKinds => "spawn_no_kinds",
        }
    }
}

/// # Errors produced by scheduler construction.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum SchedulerError {
    /// No tokio runtime is available on the current thread.
    #[error("no tokio runtime available: {0}")]
    NoRuntime(#[from] tokio::runtime::TryCurrentError),
}

impl SchedulerError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    pub fn as_label(&self) -> &'static str {
        match self {
            SchedulerError::NoRuntime(_) => "scheduler_no_runtime",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn failure(observer: &'static str, position: usize) -> DeliveryFailure {
        DeliveryFailure {
            observer,
            round: 3,
            position,
            reason: "boom".into(),
        }
    }

    #[test]
    fn test_delivery_failure_message() {
        let f = failure("display", 1);
        assert_eq!(
            f.to_string(),
            "observer 'display' failed in round 3 at position 1: boom"
        );
    }

    #[test]
    fn test_collected_failures_are_exposed_in_order() {
        let err = NotifyError::Collected {
            round: 3,
            failures: vec![failure("a", 0), failure("c", 2)],
        };
        assert_eq!(err.to_string(), "2 deliveries failed in round 3");
        let names: Vec<_> = err.failures().iter().map(|f| f.observer).collect();
        assert_eq!(names, vec!["a", "c"]);
    }

    #[test]
    fn test_fail_fast_exposes_single_failure() {
        let err = NotifyError::Delivery(failure("a", 0));
        assert_eq!(err.failures().len(), 1);
        assert_eq!(err.as_label(), "delivery_failure");
    }

    #[test]
    fn test_slot_error_labels() {
        let unknown = SlotError::UnknownStrategy {
            slot: "voice",
            name: "honk".into(),
        };
        assert_eq!(unknown.as_label(), "unknown_strategy");
        assert_eq!(unknown.to_string(), "slot 'voice' has no strategy named 'honk'");
    }
}
