//! Synthetic regression data.

use crate::error::{BnnError, Result};
use ndarray::{Array1, Array2, Axis, concatenate};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution as RandDistribution, Normal};

/// Slope of the line the toy targets are drawn around.
pub const TOY_SLOPE: f64 = 5.0;

/// Two clusters of evenly spaced inputs on [0, 2] and [6, 8] with
/// `y = 5x + ε`, `ε ~ N(0, noise_std²)`.
///
/// The gap between the clusters makes it a useful check of how predictive
/// uncertainty grows away from the data.
///
/// # Returns
/// Inputs with shape (n, 1) and targets with shape (n,).
pub fn build_toy_dataset(n: usize, noise_std: f64, seed: u64) -> Result<(Array2<f64>, Array1<f64>)> {
    if !(noise_std.is_finite() && noise_std >= 0.0) {
        return Err(BnnError::InvalidParameter(format!(
            "noise_std must be non-negative and finite, got {}",
            noise_std
        )));
    }
    let noise = Normal::new(0.0, noise_std).map_err(|e| {
        BnnError::InvalidParameter(format!("noise_std {}: {}", noise_std, e))
    })?;

    let left = Array1::linspace(0.0, 2.0, n / 2);
    let right = Array1::linspace(6.0, 8.0, n - n / 2);
    let x = concatenate(Axis(0), &[left.view(), right.view()])?;

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let y = x.mapv(|v| TOY_SLOPE * v + noise.sample(&mut rng));

    let inputs = x.insert_axis(Axis(1));
    Ok((inputs, y))
}
