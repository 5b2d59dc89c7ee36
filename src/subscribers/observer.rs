//! # Observer trait and identity handles.
//!
//! Provides [`Observe`], the extension point for reacting to snapshots, and
//! [`ObserverHandle`], the shared handle a subject stores in its registry.
//!
//! ## Identity
//! Handles compare by **reference identity**: two handles are equal only when they
//! are clones of the same `Arc`. Two observers holding equal data are still two
//! distinct subscriptions.
//!
//! ```text
//! let a = ObserverHandle::new(Printer);   ─┐
//! let b = a.clone();                       ├─ a == b   (same allocation)
//! let c = ObserverHandle::new(Printer);   ─┘  a != c   (different allocation)
//! ```
//!
//! ## Example
//! ```rust
//! use switchyard::{Observe, ObserveError, ObserverHandle, Snapshot};
//!
//! struct Threshold;
//!
//! impl Observe<u32> for Threshold {
//!     fn receive(&self, snapshot: &Snapshot<u32>) -> Result<(), ObserveError> {
//!         if *snapshot.state() > 100 {
//!             return Err(ObserveError::new("value out of range"));
//!         }
//!         Ok(())
//!     }
//!
//!     fn name(&self) -> &'static str { "threshold" }
//! }
//!
//! let h = ObserverHandle::new(Threshold);
//! assert_eq!(h.name(), "threshold");
//! assert_eq!(h, h.clone());
//! assert_ne!(h, ObserverHandle::new(Threshold));
//! ```

use std::fmt;
use std::sync::Arc;

use crate::error::ObserveError;
use crate::events::Snapshot;

/// Receiver of subject snapshots.
///
/// ### Implementation requirements
/// - `receive` runs synchronously inside the notifying call; keep it short.
/// - Return `Err` to report a failure; the subject's delivery policy decides
///   whether the rest of the round continues.
/// - Calling `attach`/`detach` on the notifying subject from inside `receive`
///   is allowed and only affects later rounds.
pub trait Observe<S>: Send + Sync + 'static {
    /// Processes one snapshot.
    fn receive(&self, snapshot: &Snapshot<S>) -> Result<(), ObserveError>;

    /// Returns the observer name used in logs and delivery failures.
    ///
    /// The default uses `type_name::<Self>()`, which can be verbose - override it when possible.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

/// Shared, identity-compared handle to an observer.
pub struct ObserverHandle<S> {
    inner: Arc<dyn Observe<S>>,
}

impl<S: 'static> ObserverHandle<S> {
    /// Wraps an observer into a new handle (new identity).
    pub fn new<O: Observe<S>>(observer: O) -> Self {
        Self {
            inner: Arc::new(observer),
        }
    }

    /// Creates a handle from an existing shared observer.
    ///
    /// The caller keeps its own `Arc` and can still inspect the observer; every
    /// handle built from clones of that `Arc` has the same identity.
    pub fn from_arc<O: Observe<S>>(observer: Arc<O>) -> Self {
        Self { inner: observer }
    }
}

impl<S: 'static> ObserverHandle<S> {
    /// Observer name.
    #[inline]
    pub fn name(&self) -> &'static str {
        self.inner.name()
    }

    /// Delivers a snapshot to the wrapped observer.
    #[inline]
    pub fn receive(&self, snapshot: &Snapshot<S>) -> Result<(), ObserveError> {
        self.inner.receive(snapshot)
    }

    /// Address of the shared allocation; the identity of this handle.
    #[inline]
    pub fn id(&self) -> usize {
        Arc::as_ptr(&self.inner) as *const () as usize
    }
}

impl<S: 'static> Clone for ObserverHandle<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: 'static> PartialEq for ObserverHandle<S> {
    fn eq(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

impl<S: 'static> Eq for ObserverHandle<S> {}

impl<S: 'static> fmt::Debug for ObserverHandle<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObserverHandle")
            .field("name", &self.name())
            .field("id", &format_args!("{:#x}", self.id()))
            .finish()
    }
}

impl<S: 'static, O: Observe<S>> From<Arc<O>> for ObserverHandle<S> {
    fn from(observer: Arc<O>) -> Self {
        Self::from_arc(observer)
    }
}
