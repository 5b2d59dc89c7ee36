//! # Immutable state snapshots delivered to observers.
//!
//! A [`Snapshot`] is captured by [`Subject::notify`](crate::Subject::notify) once
//! per round and handed unchanged to every observer of that round.
//!
//! ## Rules
//! - The state is held behind an `Arc`; later `update_state` calls swap in a new
//!   value and never touch a snapshot already captured.
//! - `subject` names the source explicitly, so observers attached to several
//!   subjects can tell them apart without inspecting the subject itself.
//! - `round` is 1-based and increases by one per `notify()` of the same subject.
//!
//! ## Example
//! ```rust
//! use switchyard::Snapshot;
//!
//! let snap = Snapshot::new("weather", 1, 21_i32);
//! assert_eq!(snap.subject(), "weather");
//! assert_eq!(snap.round(), 1);
//! assert_eq!(*snap.state(), 21);
//! ```

use std::fmt;
use std::sync::Arc;
use std::time::SystemTime;

/// State value captured at notify-time with its round metadata.
pub struct Snapshot<S> {
    subject: Arc<str>,
    round: u64,
    at: SystemTime,
    state: Arc<S>,
}

impl<S> Snapshot<S> {
    /// Creates a snapshot that owns `state`.
    pub fn new(subject: impl Into<Arc<str>>, round: u64, state: S) -> Self {
        Self::from_shared(subject, round, Arc::new(state))
    }

    /// Creates a snapshot sharing an already captured state.
    pub fn from_shared(subject: impl Into<Arc<str>>, round: u64, state: Arc<S>) -> Self {
        Self {
            subject: subject.into(),
            round,
            at: SystemTime::now(),
            state,
        }
    }

    /// Name of the subject that produced this snapshot.
    #[inline]
    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// Round number (1-based, per subject).
    #[inline]
    pub fn round(&self) -> u64 {
        self.round
    }

    /// Wall-clock capture time.
    #[inline]
    pub fn at(&self) -> SystemTime {
        self.at
    }

    /// The captured state.
    #[inline]
    pub fn state(&self) -> &S {
        &self.state
    }

    /// The captured state as a shared handle.
    #[inline]
    pub fn shared_state(&self) -> Arc<S> {
        Arc::clone(&self.state)
    }
}

// Manual impl: cloning a snapshot never requires `S: Clone`.
impl<S> Clone for Snapshot<S> {
    fn clone(&self) -> Self {
        Self {
            subject: Arc::clone(&self.subject),
            round: self.round,
            at: self.at,
            state: Arc::clone(&self.state),
        }
    }
}

impl<S: fmt::Debug> fmt::Debug for Snapshot<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Snapshot")
            .field("subject", &self.subject)
            .field("round", &self.round)
            .field("state", &self.state)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clone_shares_state() {
        let snap = Snapshot::new("s", 2, vec![1, 2, 3]);
        let copy = snap.clone();
        assert!(Arc::ptr_eq(&snap.shared_state(), &copy.shared_state()));
        assert_eq!(copy.round(), 2);
        assert_eq!(copy.subject(), "s");
    }
}
