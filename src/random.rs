//! Shared random source for leaf initialization

use rand::distributions::Distribution;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use statrs::distribution::Normal;
use tracing::{debug, instrument};

use crate::errors::{TreeError, TreeResult};

pub const DEFAULT_MEAN: f64 = 100.0;
pub const DEFAULT_STD_DEV: f64 = 50.0;

/// Random generator plus the normal distribution every leaf samples from.
///
/// Samples are drawn from the standard normal and scaled, so the source is
/// valid for any finite mean and positive standard deviation.
#[derive(Debug, Clone)]
pub struct RandomSource<R> {
    rng: R,
    unit: Normal,
    mean: f64,
    std_dev: f64,
}

impl<R: Rng> RandomSource<R> {
    /// Wraps `rng` with a normal distribution.
    ///
    /// Both parameters must be finite and `std_dev` must be positive.
    pub fn new(rng: R, mean: f64, std_dev: f64) -> TreeResult<Self> {
        if !mean.is_finite() || !std_dev.is_finite() || std_dev <= 0.0 {
            return Err(TreeError::InvalidDistribution { mean, std_dev });
        }
        Ok(Self {
            rng,
            unit: Normal::standard(),
            mean,
            std_dev,
        })
    }

    /// Normal(100, 50).
    pub fn standard(rng: R) -> Self {
        Self {
            rng,
            unit: Normal::standard(),
            mean: DEFAULT_MEAN,
            std_dev: DEFAULT_STD_DEV,
        }
    }

    /// One sample from the distribution.
    #[inline]
    pub fn draw(&mut self) -> f64 {
        self.mean + self.std_dev * self.unit.sample(&mut self.rng)
    }

    pub fn mean(&self) -> f64 {
        self.mean
    }

    pub fn std_dev(&self) -> f64 {
        self.std_dev
    }
}

impl RandomSource<StdRng> {
    /// Deterministic source when `seed` is given, OS entropy otherwise.
    #[instrument(level = "debug")]
    pub fn from_seed(seed: Option<u64>, mean: f64, std_dev: f64) -> TreeResult<Self> {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        debug!(?seed, mean, std_dev, "random source");
        Self::new(rng, mean, std_dev)
    }
}
