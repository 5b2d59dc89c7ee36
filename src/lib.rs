//! # switchyard
//!
//! **Switchyard** is a small behavioral-composition library for Rust.
//!
//! It provides two primitives: a [`Subject`] that owns a state value and
//! pushes immutable snapshots of it to an ordered set of observers, and
//! [`StrategySlot`]s that let an actor swap pieces of its behavior at runtime.
//! Timers, randomness and text output are injected capabilities, so every
//! component can be driven deterministically in tests.
//!
//! ## Architecture
//! ### Overview
//! ```text
//!   update_state(s) / publish(s)
//!            │
//!            ▼
//! ┌───────────────────────────────────────────────────────────────────┐
//! │  Subject<S>                                                       │
//! │  - SubscriberRegistry (ordered, duplicate-free handles)           │
//! │  - state: Arc<S>                                                  │
//! │  - round counter                                                  │
//! └──────────────────────────────┬────────────────────────────────────┘
//!                                │ notify(): one lock, then released
//!                                ▼
//!               ┌──────────────────────────────────┐
//!               │ NotificationRound                │
//!               │  - Snapshot { subject, round, S }│
//!               │  - fixed Vec<ObserverHandle>     │
//!               └───────┬──────────┬──────────┬────┘
//!                       ▼          ▼          ▼
//!                  obs1.receive obs2.receive obsN.receive
//!                       │
//!                       └─ may attach/detach on the Subject;
//!                          takes effect from the next round
//! ```
//!
//! ### Strategy slots
//! ```text
//! Actor { id, state, slot_a: StrategySlot<A>, slot_b: StrategySlot<B> }
//!   perform_a() ──► slot_a.get().run(..)
//!   set_a(new)  ──► slot_a.bind(new)        (this actor only)
//! ```
//!
//! ## Features
//! | Area              | Description                                                   | Key types / traits                                   |
//! |-------------------|---------------------------------------------------------------|------------------------------------------------------|
//! | **Subjects**      | Own state, run fixed-snapshot notification rounds.            | [`Subject`], [`SubjectBuilder`], [`DeliveryPolicy`]  |
//! | **Observers**     | React to snapshots; closures or custom types.                 | [`Observe`], [`ObserverHandle`], [`ObserverFn`]      |
//! | **Strategies**    | Swap behavior per actor at runtime.                           | [`SlotKind`], [`StrategySlot`], [`StrategyCatalog`]  |
//! | **Capabilities**  | Injected scheduler, random source and output sink.            | [`Scheduler`], [`RandomSource`], [`OutputSink`]      |
//! | **Errors**        | Typed errors with stable labels.                              | [`NotifyError`], [`SlotError`], [`ObserveError`]     |
//! | **Collaborators** | Reference actors and producers built on the primitives.       | [`Duck`], [`EnemySpawner`], [`WeatherStation`]       |
//!
//! ## Optional features
//! - `logging` (default): exports a simple built-in [`LogWriter`] observer _(demo/reference only)_.
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use switchyard::{DeliveryPolicy, MemorySink, Recorder, Subject, SubjectConfig};
//!
//! let out = Arc::new(MemorySink::new());
//! let subject = Subject::builder(SubjectConfig::named("temp").with_delivery(DeliveryPolicy::CollectAll))
//!     .with_sink(out.clone())
//!     .build(0_i32);
//!
//! let rec = Arc::new(Recorder::<i32>::new("display"));
//! subject.attach(Arc::clone(&rec).into());
//!
//! subject.publish(10).unwrap();
//! subject.publish(20).unwrap();
//! assert_eq!(rec.history().iter().map(|s| *s.state()).collect::<Vec<_>>(), vec![10, 20]);
//! assert_eq!(out.lines(), vec!["Subject: attached observer 'display'"]);
//! ```
mod actors;
mod capabilities;
mod core;
mod error;
mod events;
mod spawning;
mod stations;
mod strategies;
mod subscribers;

// ---- Public re-exports ----

pub use actors::{
    ActorId, Breed, Duck, Flight, FlightBehavior, FlyNoWay, FlyWithWings, IdAllocator, MuteQuack,
    Quack, QuackBehavior, Squeak, Voice,
};
pub use capabilities::{
    ManualScheduler, MemorySink, OutputSink, RandomSource, ScheduleHandle, Scheduler, SeededRandom,
    StdoutSink, ThreadRandom, TickFn, TokioScheduler, TracingSink,
};
pub use core::{
    DeliveryPolicy, NotificationRound, RoundReport, Subject, SubjectBuilder, SubjectConfig,
};
pub use error::{
    DeliveryFailure, NotifyError, ObserveError, SchedulerError, SlotError, SpawnError,
};
pub use events::Snapshot;
pub use spawning::{Enemy, EnemyKind, EnemySpawner, SpawnerConfig};
pub use stations::{ReadingDisplay, WeatherReading, WeatherStation};
pub use strategies::{CatalogBuilder, SlotKind, StrategyCatalog, StrategySlot};
pub use subscribers::{
    AttachOutcome, DetachOutcome, ObserverFn, ObserverHandle, Observe, Recorder,
    SubscriberRegistry,
};

// Optional: expose a simple built-in logger observer (demo/reference).
// Enabled by default through the `logging` feature.
#[cfg(feature = "logging")]
pub use subscribers::LogWriter;
