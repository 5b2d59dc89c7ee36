//! # Slot kinds.
//!
//! A [`SlotKind`] is a marker type that names one family of interchangeable
//! behaviors: which trait its strategies implement, what the slot is called,
//! and which strategy a fresh slot is bound to.
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use switchyard::{OutputSink, SlotKind, StrategySlot};
//!
//! pub trait SoundBehavior: Send + Sync {
//!     fn sound(&self, out: &dyn OutputSink);
//! }
//!
//! pub struct Quiet;
//! impl SoundBehavior for Quiet {
//!     fn sound(&self, _out: &dyn OutputSink) {}
//! }
//!
//! pub struct Sound;
//! impl SlotKind for Sound {
//!     const NAME: &'static str = "sound";
//!     type Strategy = dyn SoundBehavior;
//!     fn default_strategy() -> Arc<Self::Strategy> {
//!         Arc::new(Quiet)
//!     }
//! }
//!
//! let slot: StrategySlot<Sound> = StrategySlot::default();
//! assert_eq!(slot.name(), "sound");
//! ```

use std::sync::Arc;

/// Family of interchangeable strategies held by a [`StrategySlot`](crate::StrategySlot).
pub trait SlotKind: 'static {
    /// Slot name used in logs and errors.
    const NAME: &'static str;

    /// Behavior interface shared by every strategy of this kind (usually `dyn Trait`).
    type Strategy: ?Sized + Send + Sync + 'static;

    /// Documented default strategy bound by [`StrategySlot::default`](crate::StrategySlot).
    fn default_strategy() -> Arc<Self::Strategy>;
}
