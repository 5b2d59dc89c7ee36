//! # Scheduler capability.
//!
//! [`Scheduler`] invokes a callback at a fixed cadence. Core components never own
//! a timer; they hand a tick callback to whichever scheduler the caller injects.
//!
//! ## Implementations
//! - [`TokioScheduler`] one tokio task per schedule, first tick after one full
//!   interval (like `setInterval`), cancelled through a [`CancellationToken`].
//! - [`ManualScheduler`] deterministic, driven by [`ManualScheduler::advance`].
//!
//! ## Lifecycle
//! ```text
//! schedule_repeating(every, tick) ──► ScheduleHandle
//!        loop {
//!          ├─► wait `every` (cancellable)
//!          └─► tick()
//!        }
//! handle.cancel() ──► loop exits before the next tick
//! ```
//!
//! Dropping a [`ScheduleHandle`] does **not** cancel the schedule.

use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

use crate::error::SchedulerError;

/// Callback invoked on every tick.
pub type TickFn = Box<dyn FnMut() + Send + 'static>;

/// Periodic callback driver.
pub trait Scheduler {
    /// Starts invoking `tick` every `every` until the returned handle is cancelled.
    fn schedule_repeating(&self, every: Duration, tick: TickFn) -> ScheduleHandle;
}

/// Control handle for one schedule.
#[derive(Debug)]
pub struct ScheduleHandle {
    token: CancellationToken,
    join: Option<JoinHandle<()>>,
}

impl ScheduleHandle {
    fn new(token: CancellationToken, join: Option<JoinHandle<()>>) -> Self {
        Self { token, join }
    }

    /// Stops the schedule; no tick starts after this call returns.
    pub fn cancel(&self) {
        self.token.cancel();
    }

    /// True once [`cancel`](Self::cancel) was called.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Cancels the schedule and waits for its driver task to finish.
    pub async fn stopped(mut self) {
        self.token.cancel();
        if let Some(join) = self.join.take() {
            if let Err(e) = join.await {
                tracing::warn!(error = %e, "schedule driver ended abnormally");
            }
        }
    }
}

/// Minimum cadence accepted by the schedulers.
const MIN_INTERVAL: Duration = Duration::from_millis(1);

/// Tokio-backed scheduler.
#[derive(Debug, Clone)]
pub struct TokioScheduler {
    handle: Handle,
}

impl TokioScheduler {
    /// Creates a scheduler spawning onto the given runtime.
    pub fn new(handle: Handle) -> Self {
        Self { handle }
    }

    /// Creates a scheduler bound to the runtime of the current thread.
    pub fn current() -> Result<Self, SchedulerError> {
        Ok(Self::new(Handle::try_current()?))
    }
}

impl Scheduler for TokioScheduler {
    fn schedule_repeating(&self, every: Duration, mut tick: TickFn) -> ScheduleHandle {
        let every = every.max(MIN_INTERVAL);
        let token = CancellationToken::new();
        let stop = token.clone();

        let join = self.handle.spawn(async move {
            let mut interval = tokio::time::interval_at(Instant::now() + every, every);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                tokio::select! {
                    biased;
                    _ = stop.cancelled() => break,
                    _ = interval.tick() => tick(),
                }
            }
        });
        ScheduleHandle::new(token, Some(join))
    }
}

struct ManualEntry {
    every: Duration,
    elapsed: Duration,
    tick: TickFn,
    token: CancellationToken,
}

/// Deterministic scheduler driven by explicit time advances.
///
/// ### Rules
/// - `advance(by)` fires every due tick, entry by entry in registration order.
/// - Ticks may schedule new entries; those start counting on the next `advance`.
/// - Cancelled entries are dropped on the next `advance`.
#[derive(Default)]
pub struct ManualScheduler {
    entries: Mutex<Vec<ManualEntry>>,
}

impl ManualScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves the clock forward by `by` and fires due ticks. Returns how many fired.
    pub fn advance(&self, by: Duration) -> usize {
        let mut running = std::mem::take(&mut *self.lock());
        let mut fired = 0;

        for entry in running.iter_mut() {
            entry.elapsed += by;
            while entry.elapsed >= entry.every && !entry.token.is_cancelled() {
                entry.elapsed -= entry.every;
                (entry.tick)();
                fired += 1;
            }
        }

        running.retain(|e| !e.token.is_cancelled());
        let mut entries = self.lock();
        let added = std::mem::take(&mut *entries);
        *entries = running;
        entries.extend(added);
        fired
    }

    /// Number of live (not cancelled) schedules.
    #[must_use]
    pub fn active(&self) -> usize {
        self.lock()
            .iter()
            .filter(|e| !e.token.is_cancelled())
            .count()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<ManualEntry>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Scheduler for ManualScheduler {
    fn schedule_repeating(&self, every: Duration, tick: TickFn) -> ScheduleHandle {
        let token = CancellationToken::new();
        self.lock().push(ManualEntry {
            every: every.max(MIN_INTERVAL),
            elapsed: Duration::ZERO,
            tick,
            token: token.clone(),
        });
        ScheduleHandle::new(token, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counting() -> (Arc<AtomicUsize>, TickFn) {
        let n = Arc::new(AtomicUsize::new(0));
        let c = Arc::clone(&n);
        let tick: TickFn = Box::new(move || {
            c.fetch_add(1, Ordering::SeqCst);
        });
        (n, tick)
    }

    #[test]
    fn test_manual_fires_per_interval() {
        let sched = ManualScheduler::new();
        let (n, tick) = counting();
        let _h = sched.schedule_repeating(Duration::from_millis(100), tick);

        assert_eq!(sched.advance(Duration::from_millis(99)), 0);
        assert_eq!(sched.advance(Duration::from_millis(1)), 1);
        assert_eq!(sched.advance(Duration::from_millis(250)), 2);
        assert_eq!(n.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_manual_cancel_stops_ticks() {
        let sched = ManualScheduler::new();
        let (n, tick) = counting();
        let h = sched.schedule_repeating(Duration::from_millis(10), tick);
        sched.advance(Duration::from_millis(10));
        h.cancel();
        assert_eq!(sched.advance(Duration::from_millis(100)), 0);
        assert_eq!(n.load(Ordering::SeqCst), 1);
        assert_eq!(sched.active(), 0);
    }

    #[test]
    fn test_manual_zero_interval_is_clamped() {
        let sched = ManualScheduler::new();
        let (n, tick) = counting();
        let _h = sched.schedule_repeating(Duration::ZERO, tick);
        sched.advance(Duration::from_millis(5));
        assert_eq!(n.load(Ordering::SeqCst), 5);
    }

    #[tokio::test(start_paused = true)]
    async fn test_tokio_first_tick_after_full_interval() {
        let sched = TokioScheduler::current().unwrap();
        let (n, tick) = counting();
        let h = sched.schedule_repeating(Duration::from_millis(100), tick);

        tokio::time::sleep(Duration::from_millis(50)).await;
        assert_eq!(n.load(Ordering::SeqCst), 0);

        tokio::time::sleep(Duration::from_millis(300)).await;
        assert_eq!(n.load(Ordering::SeqCst), 3);

        h.stopped().await;
        tokio::time::sleep(Duration::from_millis(500)).await;
        assert_eq!(n.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_tokio_scheduler_requires_runtime() {
        let err = TokioScheduler::current().unwrap_err();
        assert_eq!(err.as_label(), "scheduler_no_runtime");
    }
}
