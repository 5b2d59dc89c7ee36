//! Strategy slots.
//!
//! This module groups the pieces that let an actor swap behavior at runtime
//! without changing its type.
//!
//! ## Contents
//! - [`SlotKind`] names a behavior family and its default strategy
//! - [`StrategySlot`] holds exactly one strategy of a kind, rebindable
//! - [`StrategyCatalog`] name → strategy table for configuration-driven binding
//!
//! ## Quick wiring
//! ```text
//! struct Duck {
//!     flight: StrategySlot<Flight>,   ──► perform_fly()   = flight.get().fly(out)
//!     voice:  StrategySlot<Voice>,    ──► perform_quack() = voice.get().quack(out)
//! }
//! duck.set_flight(Arc::new(FlyNoWay))  → only this duck changes
//! ```
//!
//! ## Defaults
//! - `StrategySlot::default()` binds [`SlotKind::default_strategy`].
//! - Actors may bind another documented default at construction.

mod catalog;
mod kind;
mod slot;

pub use catalog::{CatalogBuilder, StrategyCatalog};
pub use kind::SlotKind;
pub use slot::StrategySlot;
