//! Collaborator capabilities injected into the engine.
//!
//! ## Contents
//! - [`Scheduler`] fixed-cadence callback driver ([`TokioScheduler`], [`ManualScheduler`])
//! - [`RandomSource`] uniform integers in `[min, max)` ([`ThreadRandom`], [`SeededRandom`])
//! - [`OutputSink`] line-oriented text output ([`StdoutSink`], [`TracingSink`], [`MemorySink`])
//!
//! None of these is hard-coded anywhere in the crate: every consumer receives
//! its capability as a constructor argument.

mod random;
mod scheduler;
mod sink;

pub use random::{RandomSource, SeededRandom, ThreadRandom};
pub use scheduler::{ManualScheduler, ScheduleHandle, Scheduler, TickFn, TokioScheduler};
pub use sink::{MemorySink, OutputSink, StdoutSink, TracingSink};
