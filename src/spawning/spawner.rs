//! # Enemy spawner: a random, periodic producer feeding a subject.
//!
//! [`EnemySpawner`] builds [`Enemy`] values from injected capabilities only:
//! ids come from an [`IdAllocator`], stats and kinds from a [`RandomSource`],
//! and periodic production from whatever [`Scheduler`] the caller hands to
//! [`EnemySpawner::start`].
//!
//! ## Flow
//! ```text
//! scheduler tick ──► spawn() ──► subject.publish(enemy) ──► observers
//!                                        └─ Err ──► tracing::warn!, keep ticking
//! ```

use std::ops::Range;
use std::sync::Arc;
use std::time::Duration;

use super::enemy::{Enemy, EnemyKind};
use crate::actors::IdAllocator;
use crate::capabilities::{RandomSource, ScheduleHandle, Scheduler};
use crate::core::{RoundReport, Subject};
use crate::error::{NotifyError, SpawnError};

/// Stat ranges and kinds used by [`EnemySpawner`].
///
/// Both ranges are half-open. An empty range always yields its start.
#[derive(Debug, Clone)]
pub struct SpawnerConfig {
    /// Health range.
    ///
    /// Default: `25..100`.
    pub health: Range<i64>,
    /// Damage range.
    ///
    /// Default: `1..15`.
    pub damage: Range<i64>,
    /// Kinds to pick from, uniformly.
    ///
    /// Default: all of [`EnemyKind::ALL`].
    pub kinds: Vec<EnemyKind>,
}

impl SpawnerConfig {
    /// Restricts spawning to the given kinds.
    pub fn with_kinds(mut self, kinds: impl IntoIterator<Item = EnemyKind>) -> Self {
        self.kinds = kinds.into_iter().collect();
        self
    }
}

impl Default for SpawnerConfig {
    fn default() -> Self {
        Self {
            health: 25..100,
            damage: 1..15,
            kinds: EnemyKind::ALL.to_vec(),
        }
    }
}

/// Produces enemies with sequential ids and random stats.
pub struct EnemySpawner {
    cfg: SpawnerConfig,
    ids: Arc<IdAllocator>,
    random: Arc<dyn RandomSource>,
}

impl EnemySpawner {
    /// Creates a spawner.
    ///
    /// ### Errors
    /// [`SpawnError::NoKinds`] if `cfg.kinds` is empty.
    pub fn new(
        cfg: SpawnerConfig,
        ids: Arc<IdAllocator>,
        random: Arc<dyn RandomSource>,
    ) -> Result<Self, SpawnError> {
        if cfg.kinds.is_empty() {
            return Err(SpawnError::NoKinds);
        }
        Ok(Self { cfg, ids, random })
    }

    pub fn config(&self) -> &SpawnerConfig {
        &self.cfg
    }

    /// Builds one enemy.
    pub fn spawn(&self) -> Enemy {
        let idx = self.random.uniform_int(0, self.cfg.kinds.len() as i64) as usize;
        let kind = self.cfg.kinds[idx.min(self.cfg.kinds.len() - 1)];
        let enemy = Enemy {
            id: self.ids.next_id(),
            kind,
            health: self.draw(&self.cfg.health),
            damage: self.draw(&self.cfg.damage),
        };
        tracing::trace!(id = enemy.id.get(), kind = kind.label(), "spawned enemy");
        enemy
    }

    /// Spawns one enemy and publishes it to `subject`.
    pub fn publish_to(&self, subject: &Subject<Enemy>) -> Result<RoundReport, NotifyError> {
        subject.publish(self.spawn())
    }

    /// Spawns and publishes on every tick of `scheduler` until the handle is cancelled.
    ///
    /// Delivery failures are logged and do not stop the schedule.
    pub fn start(
        self: &Arc<Self>,
        scheduler: &dyn Scheduler,
        every: Duration,
        subject: Arc<Subject<Enemy>>,
    ) -> ScheduleHandle {
        let spawner = Arc::clone(self);
        scheduler.schedule_repeating(
            every,
            Box::new(move || {
                if let Err(e) = spawner.publish_to(&subject) {
                    tracing::warn!(
                        subject = subject.name(),
                        label = e.as_label(),
                        error = %e,
                        "enemy delivery failed"
                    );
                }
            }),
        )
    }

    fn draw(&self, range: &Range<i64>) -> i64 {
        self.random.uniform_int(range.start, range.end)
    }
}
