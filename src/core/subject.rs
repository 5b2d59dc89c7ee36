//! # Subject: state owner and notification source.
//!
//! A [`Subject`] owns a [`SubscriberRegistry`] and the current state. Changing the
//! state never reaches observers by itself; [`Subject::notify`] starts a round.
//!
//! ## Round semantics
//! ```text
//! notify()
//!   ├─► lock { round += 1; order = registry.snapshot_order(); state = Arc clone }
//!   ├─► unlock
//!   └─► NotificationRound(order, Snapshot(state)).deliver(policy)
//!          ├─ observer[0].receive(&snap)   ── may attach/detach: affects later rounds only
//!          ├─ observer[1].receive(&snap)
//!          └─ ...
//! ```
//!
//! ## Rules
//! - A round delivers to exactly the observers registered when `notify()` was called.
//! - An observer detached mid-round still receives that round if it was in the list.
//! - An observer attached mid-round first receives the next round.
//! - No lock is held while observers run, so re-entrant calls are safe.
//! - Registry no-ops (duplicate attach, unknown detach) are reported, never raised.
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use switchyard::{ObserverHandle, Recorder, Subject};
//!
//! let subject = Subject::new("thermo", 0_i32);
//! let rec = Arc::new(Recorder::new("rec"));
//! let handle = ObserverHandle::from_arc(rec.clone());
//!
//! subject.attach(handle.clone());
//! subject.update_state(10);
//! subject.notify().unwrap();
//!
//! subject.detach(&handle);
//! subject.publish(20).unwrap();
//!
//! assert_eq!(rec.count(), 1);
//! assert_eq!(*rec.last().unwrap().state(), 10);
//! ```

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::builder::SubjectBuilder;
use super::config::SubjectConfig;
use super::round::{NotificationRound, RoundReport};
use crate::capabilities::OutputSink;
use crate::error::NotifyError;
use crate::events::Snapshot;
use crate::subscribers::{AttachOutcome, DetachOutcome, ObserverHandle, SubscriberRegistry};

/// Registry, state and round counter, guarded together.
struct Inner<S> {
    registry: SubscriberRegistry<S>,
    state: Arc<S>,
    rounds: u64,
}

/// Owner of a state value and of the observers interested in it.
pub struct Subject<S> {
    name: Arc<str>,
    cfg: SubjectConfig,
    sink: Option<Arc<dyn OutputSink>>,
    inner: Mutex<Inner<S>>,
}

impl<S: Send + Sync + 'static> Subject<S> {
    /// Creates a subject with default configuration.
    pub fn new(name: impl Into<String>, initial: S) -> Self {
        Self::with_parts(SubjectConfig::named(name.into()), None, initial)
    }

    /// Returns a builder for a configured subject.
    pub fn builder(cfg: SubjectConfig) -> SubjectBuilder<S> {
        SubjectBuilder::new(cfg)
    }

    pub(crate) fn with_parts(
        cfg: SubjectConfig,
        sink: Option<Arc<dyn OutputSink>>,
        initial: S,
    ) -> Self {
        Self {
            name: Arc::from(cfg.name.as_ref()),
            cfg,
            sink,
            inner: Mutex::new(Inner {
                registry: SubscriberRegistry::new(),
                state: Arc::new(initial),
                rounds: 0,
            }),
        }
    }

    /// Subject name, carried by every snapshot.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Configuration the subject was built with.
    pub fn config(&self) -> &SubjectConfig {
        &self.cfg
    }

    /// Current state.
    pub fn state(&self) -> Arc<S> {
        Arc::clone(&self.lock().state)
    }

    /// Replaces the state. Observers see it on the next `notify()`.
    pub fn update_state(&self, new: S) {
        self.lock().state = Arc::new(new);
    }

    /// Replaces the state with `f(&current)`.
    ///
    /// `f` runs without the lock held; concurrent updates are last-writer-wins.
    pub fn update_with(&self, f: impl FnOnce(&S) -> S) {
        let current = self.state();
        let next = f(&current);
        self.update_state(next);
    }

    /// Adds an observer; attaching a present observer is a reported no-op.
    pub fn attach(&self, handle: ObserverHandle<S>) -> AttachOutcome {
        let name = handle.name();
        let outcome = self.lock().registry.attach(handle);
        match outcome {
            AttachOutcome::Attached => {
                tracing::debug!(subject = %self.name, observer = name, "observer attached");
                self.report(&format!("Subject: attached observer '{name}'"));
            }
            AttachOutcome::AlreadyAttached => {
                tracing::debug!(subject = %self.name, observer = name, "observer already attached");
                self.report(&format!(
                    "Subject: observer '{name}' has been attached already"
                ));
            }
        }
        outcome
    }

    /// Removes an observer; detaching an unknown observer is a reported no-op.
    pub fn detach(&self, handle: &ObserverHandle<S>) -> DetachOutcome {
        let name = handle.name();
        let outcome = self.lock().registry.detach(handle);
        match outcome {
            DetachOutcome::Detached => {
                tracing::debug!(subject = %self.name, observer = name, "observer detached");
                self.report(&format!("Subject: detached observer '{name}'"));
            }
            DetachOutcome::NotFound => {
                tracing::debug!(subject = %self.name, observer = name, "detach of unknown observer");
                self.report(&format!("Subject: nonexistent observer '{name}'"));
            }
        }
        outcome
    }

    /// True if `handle` is currently attached.
    pub fn is_attached(&self, handle: &ObserverHandle<S>) -> bool {
        self.lock().registry.contains(handle)
    }

    /// Number of attached observers.
    pub fn observer_count(&self) -> usize {
        self.lock().registry.len()
    }

    /// Names of attached observers, in delivery order.
    pub fn observer_names(&self) -> Vec<&'static str> {
        self.lock().registry.names()
    }

    /// Number of rounds started so far.
    pub fn rounds(&self) -> u64 {
        self.lock().rounds
    }

    /// Delivers the current state to every attached observer.
    ///
    /// ### Errors
    /// - [`NotifyError::Delivery`] under [`DeliveryPolicy::FailFast`](crate::DeliveryPolicy::FailFast)
    ///   when an observer fails; later observers of the round are skipped.
    /// - [`NotifyError::Collected`] under [`DeliveryPolicy::CollectAll`](crate::DeliveryPolicy::CollectAll)
    ///   when at least one observer failed.
    pub fn notify(&self) -> Result<RoundReport, NotifyError> {
        let round = self.begin_round();
        tracing::debug!(
            subject = %self.name,
            round = round.round(),
            observers = round.len(),
            "notifying observers"
        );
        round.deliver(self.cfg.delivery, self.cfg.catch_panics)
    }

    /// Replaces the state and notifies.
    pub fn publish(&self, new: S) -> Result<RoundReport, NotifyError> {
        self.update_state(new);
        self.notify()
    }

    /// Captures delivery order and state atomically.
    fn begin_round(&self) -> NotificationRound<S> {
        let mut inner = self.lock();
        inner.rounds += 1;
        let snapshot =
            Snapshot::from_shared(Arc::clone(&self.name), inner.rounds, Arc::clone(&inner.state));
        NotificationRound::new(inner.registry.snapshot_order(), snapshot)
    }

    fn report(&self, line: &str) {
        if !self.cfg.report_registry {
            return;
        }
        if let Some(sink) = &self.sink {
            sink.emit(line);
        }
    }

    // Critical sections never leave `Inner` half-updated, so a poisoned lock is still usable.
    fn lock(&self) -> MutexGuard<'_, Inner<S>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<S> fmt::Debug for Subject<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subject")
            .field("name", &self.name)
            .field("config", &self.cfg)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capabilities::MemorySink;
    use crate::core::DeliveryPolicy;
    use crate::error::ObserveError;
    use crate::subscribers::{Observe, ObserverFn, Recorder};
    use std::panic::AssertUnwindSafe;
    use std::sync::Weak;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Debug, Clone, PartialEq)]
    struct Temp {
        temp: i32,
    }

    fn recorder(name: &'static str) -> (Arc<Recorder<Temp>>, ObserverHandle<Temp>) {
        let rec = Arc::new(Recorder::new(name));
        let handle = ObserverHandle::from_arc(Arc::clone(&rec));
        (rec, handle)
    }

    /// Appends its name to a shared log on every delivery.
    struct Tagger {
        tag: &'static str,
        log: Arc<Mutex<Vec<&'static str>>>,
    }

    impl Observe<Temp> for Tagger {
        fn receive(&self, _snapshot: &Snapshot<Temp>) -> Result<(), ObserveError> {
            self.log.lock().unwrap().push(self.tag);
            Ok(())
        }

        fn name(&self) -> &'static str {
            self.tag
        }
    }

    /// Runs an action against the subject the first time it receives a snapshot.
    struct OnFirst {
        subject: Weak<Subject<Temp>>,
        action: Box<dyn Fn(&Subject<Temp>) + Send + Sync>,
        seen: AtomicUsize,
    }

    impl Observe<Temp> for OnFirst {
        fn receive(&self, _snapshot: &Snapshot<Temp>) -> Result<(), ObserveError> {
            if self.seen.fetch_add(1, Ordering::SeqCst) == 0 {
                if let Some(subject) = self.subject.upgrade() {
                    (self.action)(&subject);
                }
            }
            Ok(())
        }

        fn name(&self) -> &'static str {
            "on-first"
        }
    }

    #[test]
    fn test_scenario_detached_observer_receives_once() {
        let subject = Subject::new("thermo", Temp { temp: 0 });
        let (rec, o1) = recorder("o1");

        subject.attach(o1.clone());
        subject.update_state(Temp { temp: 10 });
        subject.notify().unwrap();
        subject.detach(&o1);
        subject.update_state(Temp { temp: 20 });
        subject.notify().unwrap();

        assert_eq!(rec.count(), 1);
        assert_eq!(rec.last().unwrap().state(), &Temp { temp: 10 });
    }

    #[test]
    fn test_update_without_notify_delivers_nothing() {
        let subject = Subject::new("thermo", Temp { temp: 0 });
        let (rec, h) = recorder("o");
        subject.attach(h);
        subject.update_state(Temp { temp: 5 });
        assert_eq!(rec.count(), 0);
        assert_eq!(subject.state().temp, 5);
    }

    #[test]
    fn test_delivery_follows_attach_order() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let subject = Subject::new("s", Temp { temp: 0 });
        for tag in ["h1", "h2", "h3"] {
            subject.attach(ObserverHandle::new(Tagger {
                tag,
                log: Arc::clone(&log),
            }));
        }
        let report = subject.notify().unwrap();
        assert_eq!(report.delivered, 3);
        assert_eq!(*log.lock().unwrap(), vec!["h1", "h2", "h3"]);
    }

    #[test]
    fn test_attach_during_round_waits_for_next_round() {
        let (late, late_handle) = recorder("h4");
        let subject = Arc::new_cyclic(|weak: &Weak<Subject<Temp>>| {
            let s = Subject::new("s", Temp { temp: 1 });
            let late_handle = late_handle.clone();
            s.attach(ObserverHandle::new(OnFirst {
                subject: weak.clone(),
                action: Box::new(move |subj| {
                    subj.attach(late_handle.clone());
                }),
                seen: AtomicUsize::new(0),
            }));
            s
        });

        subject.notify().unwrap();
        assert_eq!(late.count(), 0);
        assert!(subject.is_attached(&late_handle));

        subject.notify().unwrap();
        assert_eq!(late.rounds(), vec![2]);
    }

    #[test]
    fn test_detach_during_round_still_delivers_fixed_list() {
        let (h2_rec, h2) = recorder("h2");
        let (h3_rec, h3) = recorder("h3");
        let h2_for_action = h2.clone();

        let subject = Arc::new_cyclic(|weak: &Weak<Subject<Temp>>| {
            let s = Subject::new("s", Temp { temp: 1 });
            s.attach(ObserverHandle::new(OnFirst {
                subject: weak.clone(),
                action: Box::new(move |subj| {
                    subj.detach(&h2_for_action);
                }),
                seen: AtomicUsize::new(0),
            }));
            s
        });
        subject.attach(h2.clone());
        subject.attach(h3);

        subject.notify().unwrap();
        assert_eq!(h2_rec.rounds(), vec![1]);
        assert_eq!(h3_rec.rounds(), vec![1]);
        assert!(!subject.is_attached(&h2));

        subject.notify().unwrap();
        assert_eq!(h2_rec.rounds(), vec![1]);
        assert_eq!(h3_rec.rounds(), vec![1, 2]);
    }

    #[test]
    fn test_self_detach_during_round() {
        let subject = Arc::new(Subject::new("s", Temp { temp: 1 }));
        let hits = Arc::new(AtomicUsize::new(0));
        let slot: Arc<Mutex<Option<ObserverHandle<Temp>>>> = Arc::new(Mutex::new(None));

        let weak = Arc::downgrade(&subject);
        let me = Arc::clone(&slot);
        let counter = Arc::clone(&hits);
        let handle = ObserverFn::handle("once", move |_s: &Snapshot<Temp>| {
            counter.fetch_add(1, Ordering::SeqCst);
            if let (Some(subj), Some(h)) = (weak.upgrade(), me.lock().unwrap().clone()) {
                subj.detach(&h);
            }
            Ok(())
        });
        *slot.lock().unwrap() = Some(handle.clone());
        subject.attach(handle);

        subject.notify().unwrap();
        subject.notify().unwrap();
        assert_eq!(hits.load(Ordering::SeqCst), 1);
        assert_eq!(subject.observer_count(), 0);
    }

    #[test]
    fn test_snapshot_not_altered_by_later_update() {
        let subject = Subject::new("s", Temp { temp: 10 });
        let (rec, h) = recorder("o");
        subject.attach(h);
        subject.notify().unwrap();
        subject.update_state(Temp { temp: 99 });
        subject.update_with(|t| Temp { temp: t.temp + 1 });

        assert_eq!(rec.last().unwrap().state().temp, 10);
        assert_eq!(subject.state().temp, 100);
    }

    #[test]
    fn test_fail_fast_surfaces_error_and_skips_rest() {
        let subject = Subject::new("s", Temp { temp: 0 });
        subject.attach(ObserverFn::handle("broken", |_s: &Snapshot<Temp>| {
            Err(ObserveError::new("disk full"))
        }));
        let (rec, h) = recorder("after");
        subject.attach(h);

        let err = subject.notify().unwrap_err();
        assert_eq!(err.as_label(), "delivery_failure");
        assert_eq!(err.failures()[0].reason, "disk full");
        assert_eq!(rec.count(), 0);
        assert_eq!(subject.rounds(), 1);
    }

    #[test]
    fn test_collect_all_policy_from_builder() {
        let cfg = SubjectConfig::named("s").with_delivery(DeliveryPolicy::CollectAll);
        let (rec, h) = recorder("after");
        let subject = Subject::builder(cfg)
            .with_observers(vec![
                ObserverFn::handle("broken", |_s: &Snapshot<Temp>| {
                    Err(ObserveError::new("disk full"))
                }),
                h,
            ])
            .build(Temp { temp: 0 });

        let err = subject.notify().unwrap_err();
        assert_eq!(err.failures().len(), 1);
        assert_eq!(rec.count(), 1);
    }

    #[test]
    fn test_registry_outcomes_reported_to_sink() {
        let sink = Arc::new(MemorySink::new());
        let subject = Subject::builder(SubjectConfig::named("s"))
            .with_sink(sink.clone())
            .build(Temp { temp: 0 });
        let (_rec, h) = recorder("display");

        assert!(subject.attach(h.clone()).is_attached());
        assert!(!subject.attach(h.clone()).is_attached());
        assert!(subject.detach(&h).is_detached());
        assert!(!subject.detach(&h).is_detached());

        assert_eq!(
            sink.lines(),
            vec![
                "Subject: attached observer 'display'",
                "Subject: observer 'display' has been attached already",
                "Subject: detached observer 'display'",
                "Subject: nonexistent observer 'display'",
            ]
        );
    }

    #[test]
    fn test_snapshot_carries_subject_name_and_round() {
        let subject = Subject::new("weather", Temp { temp: 0 });
        let (rec, h) = recorder("o");
        subject.attach(h);
        subject.notify().unwrap();
        subject.notify().unwrap();

        let last = rec.last().unwrap();
        assert_eq!(last.subject(), "weather");
        assert_eq!(last.round(), 2);
    }

    #[test]
    fn test_panic_unwinds_when_not_caught_and_subject_stays_usable() {
        let cfg = SubjectConfig {
            catch_panics: false,
            ..SubjectConfig::named("s")
        };
        let subject = Subject::builder(cfg).build(Temp { temp: 1 });
        let bomb = ObserverFn::handle("bomb", |_s: &Snapshot<Temp>| -> Result<(), ObserveError> {
            panic!("sensor exploded")
        });
        subject.attach(bomb.clone());

        let res = std::panic::catch_unwind(AssertUnwindSafe(|| subject.notify()));
        assert!(res.is_err());

        let (rec, h) = recorder("o");
        subject.detach(&bomb);
        subject.attach(h);
        subject.publish(Temp { temp: 2 }).unwrap();
        assert_eq!(rec.rounds(), vec![2]);
        assert_eq!(rec.last().unwrap().state().temp, 2);
    }

    #[test]
    fn test_registry_reporting_can_be_disabled() {
        let sink = Arc::new(MemorySink::new());
        let cfg = SubjectConfig {
            report_registry: false,
            ..SubjectConfig::named("s")
        };
        let subject = Subject::builder(cfg)
            .with_sink(sink.clone())
            .build(Temp { temp: 0 });
        let (_rec, h) = recorder("display");

        subject.attach(h.clone());
        subject.attach(h.clone());
        subject.detach(&h);
        subject.detach(&h);
        assert!(sink.is_empty());
    }

    #[test]
    fn test_concurrent_attach_never_tears_a_round() {
        const ROUNDS: u64 = 200;
        const LATE: usize = 20;

        let subject = Subject::new("s", Temp { temp: 0 });
        let late: Vec<_> = (0..LATE).map(|_| recorder("late")).collect();

        std::thread::scope(|scope| {
            scope.spawn(|| {
                for _ in 0..ROUNDS {
                    subject.notify().unwrap();
                }
            });
            scope.spawn(|| {
                for (_, h) in &late {
                    subject.attach(h.clone());
                    std::thread::yield_now();
                }
            });
        });

        assert_eq!(subject.rounds(), ROUNDS);
        for (rec, _) in &late {
            let rounds = rec.rounds();
            // every round started after the attach, each exactly once
            if let Some(&first) = rounds.first() {
                let expected: Vec<u64> = (first..=ROUNDS).collect();
                assert_eq!(rounds, expected);
            }
        }
    }
}
