//! Snapshot data model.
//!
//! ## Contents
//! - [`Snapshot`] immutable state value plus source/round metadata
//!
//! ## Quick reference
//! - **Producer**: `Subject::notify()` captures one snapshot per round.
//! - **Consumers**: every [`Observe`](crate::Observe) implementation present in
//!   the round's fixed delivery list.

mod snapshot;

pub use snapshot::Snapshot;
