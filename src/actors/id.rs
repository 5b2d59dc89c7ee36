//! # Actor identity.
//!
//! [`ActorId`] identifies an actor independently of the strategies it holds.
//! [`IdAllocator`] hands out ids from an explicit counter that callers create and
//! inject; there is no hidden process-wide counter.
//!
//! ## Init / reset rules
//! - A new allocator starts at the value given to [`IdAllocator::starting_at`] (default 0).
//! - [`IdAllocator::reset`] returns the counter to that start value.
//! - Ids are unique per allocator until it is reset.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Identity of an actor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ActorId(pub u64);

impl ActorId {
    #[inline]
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Sequential id source.
#[derive(Debug)]
pub struct IdAllocator {
    start: u64,
    next: AtomicU64,
}

impl IdAllocator {
    /// Allocator starting at 0.
    #[must_use]
    pub fn new() -> Self {
        Self::starting_at(0)
    }

    /// Allocator starting at `start`.
    #[must_use]
    pub fn starting_at(start: u64) -> Self {
        Self {
            start,
            next: AtomicU64::new(start),
        }
    }

    /// Takes the next id.
    pub fn next_id(&self) -> ActorId {
        ActorId(self.next.fetch_add(1, Ordering::Relaxed))
    }

    /// The id the next call to [`next_id`](Self::next_id) will return.
    #[must_use]
    pub fn peek(&self) -> ActorId {
        ActorId(self.next.load(Ordering::Relaxed))
    }

    /// Returns the counter to its start value.
    pub fn reset(&self) {
        self.next.store(self.start, Ordering::Relaxed);
    }
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequential_and_reset() {
        let ids = IdAllocator::starting_at(10);
        assert_eq!(ids.next_id(), ActorId(10));
        assert_eq!(ids.next_id(), ActorId(11));
        assert_eq!(ids.peek(), ActorId(12));
        ids.reset();
        assert_eq!(ids.next_id(), ActorId(10));
    }

    #[test]
    fn test_independent_allocators() {
        let a = IdAllocator::new();
        let b = IdAllocator::new();
        a.next_id();
        a.next_id();
        assert_eq!(b.next_id(), ActorId(0));
    }
}
