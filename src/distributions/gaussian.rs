//! Gaussian (Normal) distribution.

use crate::error::{BnnError, Result};
use ndarray::Array1;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution as RandDistribution, Normal};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Log-density of N(loc, scale²) at `x`.
///
/// `scale` is not checked; callers hold a validated scale.
#[inline]
pub fn gaussian_log_prob(x: f64, loc: f64, scale: f64) -> f64 {
    let z = (x - loc) / scale;
    -0.5 * (2.0 * PI).ln() - scale.ln() - 0.5 * z * z
}

/// Gaussian distribution with a fixed location and a strictly positive scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Gaussian {
    loc: f64,
    scale: f64,
}

impl Gaussian {
    pub fn new(loc: f64, scale: f64) -> Result<Self> {
        if !loc.is_finite() {
            return Err(BnnError::InvalidParameter(format!(
                "Gaussian loc must be finite, got {}",
                loc
            )));
        }
        if !(scale.is_finite() && scale > 0.0) {
            return Err(BnnError::InvalidParameter(format!(
                "Gaussian scale must be positive and finite, got {}",
                scale
            )));
        }
        Ok(Self { loc, scale })
    }

    /// Zero-mean Gaussian, as used for priors.
    pub fn centered(scale: f64) -> Result<Self> {
        Self::new(0.0, scale)
    }

    /// N(0, 1).
    pub fn standard() -> Self {
        Self {
            loc: 0.0,
            scale: 1.0,
        }
    }

    pub fn loc(&self) -> f64 {
        self.loc
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Log probability of a single value.
    pub fn log_prob(&self, x: f64) -> f64 {
        gaussian_log_prob(x, self.loc, self.scale)
    }

    /// Sum of independent log probabilities.
    pub fn log_prob_sum<'a, I>(&self, values: I) -> f64
    where
        I: IntoIterator<Item = &'a f64>,
    {
        // The normalizing term is shared, so only the quadratic part is summed per value.
        let mut count = 0usize;
        let mut sq = 0.0;
        for &x in values {
            let z = (x - self.loc) / self.scale;
            sq += z * z;
            count += 1;
        }
        let norm = -0.5 * (2.0 * PI).ln() - self.scale.ln();
        count as f64 * norm - 0.5 * sq
    }

    /// Draw `n_samples` independent values.
    pub fn sample(&self, n_samples: usize, seed: u64) -> Result<Array1<f64>> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.sample_with(n_samples, &mut rng)
    }

    /// Draw `n_samples` values from an existing generator.
    pub fn sample_with<R: rand::Rng + ?Sized>(
        &self,
        n_samples: usize,
        rng: &mut R,
    ) -> Result<Array1<f64>> {
        let normal = Normal::new(self.loc, self.scale).map_err(|e| {
            BnnError::InvalidParameter(format!(
                "cannot sample N({}, {}): {}",
                self.loc, self.scale, e
            ))
        })?;
        Ok(Array1::from_iter((0..n_samples).map(|_| normal.sample(rng))))
    }
}
