//! # Built-in observers
//!
//! These are small, self-contained implementations useful for demos and tests.
//!
//! - [`LogWriter`]: writes snapshots in a human-readable form (demo/debug).
//! - [`Recorder`]: keeps every snapshot received (tests, latest-value displays).

#[cfg(feature = "logging")]
mod log;
mod recorder;

#[cfg(feature = "logging")]
pub use log::LogWriter;
pub use recorder::Recorder;
