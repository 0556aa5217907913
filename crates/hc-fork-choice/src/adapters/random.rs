//! Random Source Adapters

use crate::domain::{ForkChoiceError, ForkChoiceResult};
use crate::ports::RandomSource;
use parking_lot::Mutex;
use rand::rngs::{OsRng, StdRng};
use rand::{Rng, SeedableRng};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Production random source.
///
/// A fast `StdRng` seeded once from OS entropy. Not reproducible across
/// restarts; use `from_seed` for reproducible runs.
#[derive(Debug)]
pub struct SeededRandomSource {
    rng: Mutex<StdRng>,
}

impl SeededRandomSource {
    /// Seed from the operating system CSPRNG.
    ///
    /// # Errors
    /// `EntropyUnavailable` if the OS source fails. The node must not start
    /// with a biased tie-breaker.
    pub fn from_entropy() -> ForkChoiceResult<Self> {
        let rng = StdRng::from_rng(OsRng)
            .map_err(|e| ForkChoiceError::EntropyUnavailable(e.to_string()))?;
        Ok(Self {
            rng: Mutex::new(rng),
        })
    }

    /// Deterministic source for tests and simulations.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl RandomSource for SeededRandomSource {
    fn next_f64(&self) -> f64 {
        self.rng.lock().gen::<f64>()
    }
}

/// Fixed random source for deterministic testing.
///
/// Always returns the same value and counts how often it was drawn.
#[derive(Debug)]
pub struct FixedRandomSource {
    value: f64,
    draws: AtomicUsize,
}

impl FixedRandomSource {
    pub fn new(value: f64) -> Self {
        Self {
            value,
            draws: AtomicUsize::new(0),
        }
    }

    /// Coin always lands on "reorg".
    pub fn heads() -> Self {
        Self::new(0.0)
    }

    /// Coin always lands on "keep".
    pub fn tails() -> Self {
        Self::new(0.75)
    }

    /// Number of draws so far.
    pub fn draws(&self) -> usize {
        self.draws.load(Ordering::SeqCst)
    }
}

impl RandomSource for FixedRandomSource {
    fn next_f64(&self) -> f64 {
        self.draws.fetch_add(1, Ordering::SeqCst);
        self.value
    }
}
