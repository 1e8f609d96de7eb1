//! Local pseudo-random source.

use async_trait::async_trait;
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{RandomError, RandomSource};

/// Uniform generator backed by a `StdRng` behind a `parking_lot::Mutex`.
#[derive(Debug)]
pub struct LocalRandom {
    rng: Mutex<StdRng>,
}

impl LocalRandom {
    /// Generator seeded from the operating system.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_os_rng()),
        }
    }

    /// Deterministic generator for tests and benchmarks.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    /// Draw synchronously.
    ///
    /// # Errors
    ///
    /// Returns [`RandomError::InvalidRange`] when `min > max`.
    pub fn draw(&self, min: i64, max: i64) -> Result<i64, RandomError> {
        if min > max {
            return Err(RandomError::InvalidRange { min, max });
        }
        Ok(self.rng.lock().random_range(min..=max))
    }
}

impl Default for LocalRandom {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RandomSource for LocalRandom {
    fn name(&self) -> &'static str {
        "local"
    }

    async fn next_in_range(&self, min: i64, max: i64) -> Result<i64, RandomError> {
        self.draw(min, max)
    }
}
