//! # Closure-backed observer (`ObserverFn`)
//!
//! [`ObserverFn`] wraps a closure `F: Fn(&Snapshot<S>) -> Result<(), ObserveError>`
//! so small reactions do not need a dedicated type.
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicU32, Ordering};
//! use switchyard::{ObserverFn, ObserverHandle, Snapshot, Subject};
//!
//! let hits = Arc::new(AtomicU32::new(0));
//! let counter = Arc::clone(&hits);
//! let h: ObserverHandle<u8> = ObserverFn::handle("counter", move |_snap: &Snapshot<u8>| {
//!     counter.fetch_add(1, Ordering::Relaxed);
//!     Ok(())
//! });
//!
//! let subject = Subject::new("demo", 0_u8);
//! subject.attach(h);
//! subject.notify().unwrap();
//! assert_eq!(hits.load(Ordering::Relaxed), 1);
//! ```

use std::marker::PhantomData;

use crate::error::ObserveError;
use crate::events::Snapshot;
use crate::subscribers::{Observe, ObserverHandle};

/// Function-backed observer implementation.
pub struct ObserverFn<S, F> {
    name: &'static str,
    f: F,
    _state: PhantomData<fn(&S)>,
}

impl<S, F> ObserverFn<S, F>
where
    S: 'static,
    F: Fn(&Snapshot<S>) -> Result<(), ObserveError> + Send + Sync + 'static,
{
    /// Creates a new function-backed observer.
    ///
    /// Prefer [`ObserverFn::handle`] when you immediately need an [`ObserverHandle`].
    pub fn new(name: &'static str, f: F) -> Self {
        Self {
            name,
            f,
            _state: PhantomData,
        }
    }

    /// Creates the observer and returns it as a fresh handle.
    pub fn handle(name: &'static str, f: F) -> ObserverHandle<S> {
        ObserverHandle::new(Self::new(name, f))
    }
}

impl<S, F> Observe<S> for ObserverFn<S, F>
where
    S: 'static,
    F: Fn(&Snapshot<S>) -> Result<(), ObserveError> + Send + Sync + 'static,
{
    fn receive(&self, snapshot: &Snapshot<S>) -> Result<(), ObserveError> {
        (self.f)(snapshot)
    }

    fn name(&self) -> &'static str {
        self.name
    }
}
