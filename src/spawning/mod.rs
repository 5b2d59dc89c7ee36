//! Random enemy production on a schedule.
//!
//! - [`Enemy`], [`EnemyKind`] the produced values
//! - [`EnemySpawner`], [`SpawnerConfig`] the producer and its stat ranges

mod enemy;
mod spawner;

pub use enemy::{Enemy, EnemyKind};
pub use spawner::{EnemySpawner, SpawnerConfig};
