//! # Random source capability.
//!
//! [`RandomSource`] yields uniform integers in a half-open range `[min, max)`.
//! It is only consumed by the collaborators (enemy spawner, weather
//! station); subjects and slots never draw random numbers.
//!
//! - [`ThreadRandom`] uses the thread-local generator (`rand::rng()`).
//! - [`SeededRandom`] wraps a seeded `StdRng` for reproducible runs.
//!
//! ## Example
//! ```rust
//! use switchyard::{RandomSource, SeededRandom};
//!
//! let a = SeededRandom::new(7);
//! let b = SeededRandom::new(7);
//! let xs: Vec<i64> = (0..5).map(|_| a.uniform_int(0, 10)).collect();
//! let ys: Vec<i64> = (0..5).map(|_| b.uniform_int(0, 10)).collect();
//! assert_eq!(xs, ys);
//! assert!(xs.iter().all(|x| (0..10).contains(x)));
//! ```

use std::sync::{Mutex, PoisonError};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of uniform integers.
pub trait RandomSource: Send + Sync {
    /// Returns an integer in `[min, max)`.
    ///
    /// An empty range (`max <= min`) returns `min`.
    fn uniform_int(&self, min: i64, max: i64) -> i64;
}

/// Thread-local generator.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn uniform_int(&self, min: i64, max: i64) -> i64 {
        if max <= min {
            return min;
        }
        rand::rng().random_range(min..max)
    }
}

/// Seeded, reproducible generator.
#[derive(Debug)]
pub struct SeededRandom {
    rng: Mutex<StdRng>,
}

impl SeededRandom {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl RandomSource for SeededRandom {
    fn uniform_int(&self, min: i64, max: i64) -> i64 {
        if max <= min {
            return min;
        }
        self.rng
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .random_range(min..max)
    }
}
