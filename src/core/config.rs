//! # Subject configuration.
//!
//! Provides [`SubjectConfig`], the settings a [`Subject`](crate::Subject) is built
//! with, and [`DeliveryPolicy`], the failure policy of a notification round.
//!
//! Config is used through the builder:
//! `Subject::builder(config).with_sink(sink).build(initial_state)`.

use std::borrow::Cow;

/// What a round does when an observer fails.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DeliveryPolicy {
    /// Abort the remaining deliveries and return the first failure (default).
    #[default]
    FailFast,
    /// Deliver to every observer of the round, then return all failures.
    CollectAll,
}

/// Settings of one subject.
///
/// ## Field semantics
/// - `name`: source label carried by every snapshot
/// - `delivery`: failure policy of a round
/// - `catch_panics`: convert a panicking `receive` into a delivery failure
/// - `report_registry`: also write attach/detach outcomes to the output sink
#[derive(Clone, Debug)]
pub struct SubjectConfig {
    /// Source label carried by every snapshot.
    pub name: Cow<'static, str>,

    /// Failure policy of a notification round.
    pub delivery: DeliveryPolicy,

    /// Convert panics inside `receive` into delivery failures.
    ///
    /// With `false` the panic unwinds to the caller of `notify()`.
    pub catch_panics: bool,

    /// Write attach/detach outcomes to the configured output sink.
    ///
    /// Has no effect when no sink is configured. `tracing` events are emitted regardless.
    pub report_registry: bool,
}

impl SubjectConfig {
    /// Default configuration with the given name.
    pub fn named(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Returns the config with another delivery policy.
    #[must_use]
    pub fn with_delivery(mut self, delivery: DeliveryPolicy) -> Self {
        self.delivery = delivery;
        self
    }
}

impl Default for SubjectConfig {
    /// Default configuration:
    ///
    /// - `name = "subject"`
    /// - `delivery = DeliveryPolicy::FailFast`
    /// - `catch_panics = true`
    /// - `report_registry = true`
    fn default() -> Self {
        Self {
            name: Cow::Borrowed("subject"),
            delivery: DeliveryPolicy::default(),
            catch_panics: true,
            report_registry: true,
        }
    }
}
