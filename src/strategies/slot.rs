//! # Strategy slot.
//!
//! [`StrategySlot`] holds exactly one strategy of a [`SlotKind`] at a time.
//!
//! ## State machine
//! ```text
//! new / default / from_catalog ──► Bound(x) ──bind(y)──► Bound(y) ──bind(z)──► ...
//! ```
//! There is no unbound state and no terminal state.
//!
//! ## Rules
//! - `bind` is a pure replace: the slot drops its reference to the old strategy
//!   and never calls it again.
//! - Rebinding needs `&mut self`; an invocation in progress holds its own borrow
//!   or `Arc` of the old strategy and is not affected.
//! - Two slots never share state; at most they share an immutable strategy value.

use std::fmt;
use std::sync::Arc;

use super::catalog::StrategyCatalog;
use super::kind::SlotKind;
use crate::error::SlotError;

/// Rebindable holder for one strategy.
pub struct StrategySlot<K: SlotKind> {
    strategy: Arc<K::Strategy>,
    rebinds: u32,
}

impl<K: SlotKind> StrategySlot<K> {
    /// Creates a slot bound to `strategy`.
    pub fn new(strategy: Arc<K::Strategy>) -> Self {
        Self {
            strategy,
            rebinds: 0,
        }
    }

    /// Creates a slot bound to the catalog's default strategy.
    pub fn from_catalog(catalog: &StrategyCatalog<K>) -> Self {
        Self::new(catalog.default_strategy())
    }

    /// Replaces the bound strategy.
    pub fn bind(&mut self, strategy: Arc<K::Strategy>) {
        self.strategy = strategy;
        self.rebinds = self.rebinds.saturating_add(1);
        tracing::trace!(slot = K::NAME, rebinds = self.rebinds, "strategy rebound");
    }

    /// Replaces the bound strategy by the catalog entry called `name`.
    ///
    /// On error the slot keeps its current strategy.
    pub fn bind_named(&mut self, catalog: &StrategyCatalog<K>, name: &str) -> Result<(), SlotError> {
        let strategy = catalog.resolve(name)?;
        self.bind(strategy);
        Ok(())
    }

    /// The currently bound strategy.
    #[inline]
    pub fn get(&self) -> &K::Strategy {
        &self.strategy
    }

    /// The currently bound strategy as a shared handle.
    #[inline]
    pub fn shared(&self) -> Arc<K::Strategy> {
        Arc::clone(&self.strategy)
    }

    /// Slot name.
    #[inline]
    pub fn name(&self) -> &'static str {
        K::NAME
    }

    /// Number of `bind` calls since construction.
    #[inline]
    pub fn rebinds(&self) -> u32 {
        self.rebinds
    }
}

impl<K: SlotKind> Default for StrategySlot<K> {
    /// Binds [`SlotKind::default_strategy`].
    fn default() -> Self {
        Self::new(K::default_strategy())
    }
}

impl<K: SlotKind> Clone for StrategySlot<K> {
    fn clone(&self) -> Self {
        Self {
            strategy: Arc::clone(&self.strategy),
            rebinds: self.rebinds,
        }
    }
}

impl<K: SlotKind> fmt::Debug for StrategySlot<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StrategySlot")
            .field("slot", &K::NAME)
            .field("rebinds", &self.rebinds)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    trait Count: Send + Sync {
        fn hit(&self) -> &'static str;
    }

    struct A(AtomicUsize);
    struct B;

    impl Count for A {
        fn hit(&self) -> &'static str {
            self.0.fetch_add(1, Ordering::SeqCst);
            "a"
        }
    }

    impl Count for B {
        fn hit(&self) -> &'static str {
            "b"
        }
    }

    struct Counter;

    impl SlotKind for Counter {
        const NAME: &'static str = "counter";
        type Strategy = dyn Count;
        fn default_strategy() -> Arc<Self::Strategy> {
            Arc::new(B)
        }
    }

    #[test]
    fn test_default_binds_kind_default() {
        let slot: StrategySlot<Counter> = StrategySlot::default();
        assert_eq!(slot.get().hit(), "b");
        assert_eq!(slot.rebinds(), 0);
    }

    #[test]
    fn test_bind_replaces_and_old_is_not_called_again() {
        let a = Arc::new(A(AtomicUsize::new(0)));
        let mut slot = StrategySlot::<Counter>::new(a.clone());
        assert_eq!(slot.get().hit(), "a");

        slot.bind(Arc::new(B));
        assert_eq!(slot.get().hit(), "b");
        assert_eq!(slot.get().hit(), "b");
        assert_eq!(a.0.load(Ordering::SeqCst), 1);
        assert_eq!(slot.rebinds(), 1);
        // the slot released its reference to the old strategy
        assert_eq!(Arc::strong_count(&a), 1);
    }

    #[test]
    fn test_shared_handle_survives_rebind() {
        let mut slot = StrategySlot::<Counter>::new(Arc::new(A(AtomicUsize::new(0))));
        let in_flight = slot.shared();
        slot.bind(Arc::new(B));
        assert_eq!(in_flight.hit(), "a");
        assert_eq!(slot.get().hit(), "b");
    }
}
