//! # Ordered, duplicate-free registry of observer handles.
//!
//! [`SubscriberRegistry`] is the storage behind a [`Subject`](crate::Subject).
//! It is owned by exactly one subject, which is its only mutator.
//!
//! ## Rules
//! - **Insertion order is delivery order.**
//! - **Idempotent attach**: attaching a present handle is a no-op ([`AttachOutcome::AlreadyAttached`]).
//! - **Tolerant detach**: detaching an absent handle is a no-op ([`DetachOutcome::NotFound`]).
//! - Neither operation ever fails.
//! - [`snapshot_order`](SubscriberRegistry::snapshot_order) returns an owned copy, so
//!   a round in progress cannot observe later mutations.
//!
//! ## Internal scheme
//! ```text
//! attach(h):  contains(h) ? AlreadyAttached : push(h) → Attached
//! detach(h):  position(h) ? remove(i) → Detached : NotFound
//! snapshot_order() -> Vec<ObserverHandle>   (Arc clones, same order)
//! ```

use crate::subscribers::ObserverHandle;

/// Result of [`SubscriberRegistry::attach`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttachOutcome {
    /// The handle was appended to the registry.
    Attached,
    /// The handle was already present; nothing changed.
    AlreadyAttached,
}

impl AttachOutcome {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    pub fn as_label(&self) -> &'static str {
        match self {
            AttachOutcome::Attached => "attached",
            AttachOutcome::AlreadyAttached => "duplicate_subscription",
        }
    }

    /// True if the registry changed.
    #[inline]
    pub fn is_attached(&self) -> bool {
        matches!(self, AttachOutcome::Attached)
    }
}

/// Result of [`SubscriberRegistry::detach`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetachOutcome {
    /// The handle was removed from the registry.
    Detached,
    /// The handle was not present; nothing changed.
    NotFound,
}

impl DetachOutcome {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    pub fn as_label(&self) -> &'static str {
        match self {
            DetachOutcome::Detached => "detached",
            DetachOutcome::NotFound => "unknown_subscriber",
        }
    }

    /// True if the registry changed.
    #[inline]
    pub fn is_detached(&self) -> bool {
        matches!(self, DetachOutcome::Detached)
    }
}

/// Ordered set of observer handles.
pub struct SubscriberRegistry<S> {
    handles: Vec<ObserverHandle<S>>,
}

impl<S: 'static> SubscriberRegistry<S> {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            handles: Vec::new(),
        }
    }

    /// Appends `handle` unless it is already present.
    pub fn attach(&mut self, handle: ObserverHandle<S>) -> AttachOutcome {
        if self.contains(&handle) {
            return AttachOutcome::AlreadyAttached;
        }
        self.handles.push(handle);
        AttachOutcome::Attached
    }

    /// Removes `handle` if present, preserving the order of the others.
    pub fn detach(&mut self, handle: &ObserverHandle<S>) -> DetachOutcome {
        match self.handles.iter().position(|h| h == handle) {
            Some(i) => {
                self.handles.remove(i);
                DetachOutcome::Detached
            }
            None => DetachOutcome::NotFound,
        }
    }

    /// Returns an owned copy of the handles in delivery order.
    #[must_use]
    pub fn snapshot_order(&self) -> Vec<ObserverHandle<S>> {
        self.handles.clone()
    }

    /// True if `handle` is registered.
    #[must_use]
    pub fn contains(&self, handle: &ObserverHandle<S>) -> bool {
        self.handles.iter().any(|h| h == handle)
    }

    /// Observer names in delivery order.
    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        self.handles.iter().map(ObserverHandle::name).collect()
    }

    /// Number of registered handles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    /// True if there are no registered handles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }
}

impl<S: 'static> Default for SubscriberRegistry<S> {
    fn default() -> Self {
        Self::new()
    }
}
