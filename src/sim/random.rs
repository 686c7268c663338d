//! Random Variate Source
//!
//! One generator is created per process and handed by `&mut` to every
//! component that needs randomness. Episodes of a batch share it, so they
//! are independent draws but a re-run of the process is not reproducible
//! unless the source is built with [`RandomSource::seeded`].

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};
use std::time::{SystemTime, UNIX_EPOCH};

/// Uniform and Gaussian draws over a single seeded generator
#[derive(Debug)]
pub struct RandomSource {
    rng: StdRng,
    seed: u64,
}

impl RandomSource {
    /// Seed from the wall clock (process start)
    pub fn from_time() -> Self {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or_default();
        Self::seeded(seed)
    }

    /// Fixed seed, for tests and replays
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Seed this source was created with
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform draw over the closed interval `[lo, hi]`
    pub fn uniform(&mut self, lo: f64, hi: f64) -> f64 {
        if hi <= lo {
            return lo;
        }
        self.rng.gen_range(lo..=hi)
    }

    /// Gaussian draw `N(mean, std_dev)`; a zero spread returns `mean` exactly
    pub fn normal(&mut self, mean: f64, std_dev: f64) -> f64 {
        if std_dev <= 0.0 {
            return mean;
        }
        Normal::new(mean, std_dev)
            .map(|dist| dist.sample(&mut self.rng))
            .unwrap_or(mean)
    }

    /// Uniform index in `0..len`; `len` must be non-zero
    pub fn index(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }
}
