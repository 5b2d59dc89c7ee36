//! # Observers and the subscriber registry.
//!
//! This module provides the [`Observe`] trait, identity-compared
//! [`ObserverHandle`]s, the ordered [`SubscriberRegistry`] owned by every
//! [`Subject`](crate::Subject), and a few built-in observers.
//!
//! ## Architecture
//! ```text
//! Snapshot flow:
//!   Subject::notify() ── fixed order ──► ObserverHandle::receive(&Snapshot)
//!                                              │
//!                                    ┌─────────┼─────────┬────────┐
//!                                    ▼         ▼         ▼        ▼
//!                                LogWriter  Recorder  ObserverFn  Custom
//! ```
//!
//! ## Observer types
//! - **Passive observers** - react to snapshots (logging, displays, alerts)
//! - **Stateful observers** - keep what they received ([`Recorder`])
//!
//! ## Implementing custom observers
//! ```no_run
//! use switchyard::{Observe, ObserveError, Snapshot};
//!
//! struct Alarm;
//!
//! impl Observe<i32> for Alarm {
//!     fn receive(&self, snapshot: &Snapshot<i32>) -> Result<(), ObserveError> {
//!         if *snapshot.state() < 3 {
//!             println!("alarm: level low in round {}", snapshot.round());
//!         }
//!         Ok(())
//!     }
//! }
//! ```

mod embedded;
mod observer;
mod observer_fn;
mod registry;

#[cfg(feature = "logging")]
pub use embedded::LogWriter;
pub use embedded::Recorder;
pub use observer::{Observe, ObserverHandle};
pub use observer_fn::ObserverFn;
pub use registry::{AttachOutcome, DetachOutcome, SubscriberRegistry};
