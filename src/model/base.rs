//! Base trait for joint log-densities.

use crate::distributions::Gaussian;
use crate::error::{BnnError, Result};
use crate::types::ObservationBatch;
use ndarray::{Array1, Array2, ArrayView1, ArrayView2};
use rayon::prelude::*;
use std::borrow::Cow;

/// Joint log-density `log p(y | x, θ) + log p(θ)` of a model with an
/// independent zero-mean Gaussian prior on every parameter.
///
/// This is the interface an inference procedure sees: it proposes flat
/// parameter vectors and receives scalar log-densities back.
pub trait LogDensity: Send + Sync {
    /// Get the name of this model (e.g., "BayesianNN").
    fn name(&self) -> &'static str;

    /// Length of the flat parameter vector.
    fn n_params(&self) -> usize;

    /// Prior shared by every parameter.
    fn prior(&self) -> &Gaussian;

    /// Log-likelihood of the batch's targets given `params`.
    ///
    /// # Arguments
    /// * `data` - Inputs and scalar targets
    /// * `params` - Flat parameter vector of length `n_params()`
    fn log_likelihood(&self, data: &ObservationBatch, params: &ArrayView1<f64>) -> Result<f64>;

    /// Log-prior of `params`.
    fn log_prior(&self, params: &ArrayView1<f64>) -> Result<f64> {
        check_n_params(self.n_params(), params)?;
        Ok(self.prior().log_prob_sum(params.iter()))
    }

    /// Joint log-density: log-likelihood plus log-prior.
    fn log_density(&self, data: &ObservationBatch, params: &ArrayView1<f64>) -> Result<f64> {
        let log_lik = self.log_likelihood(data, params)?;
        let log_prior = self.log_prior(params)?;
        Ok(log_lik + log_prior)
    }

    /// Evaluate the joint log-density for every row of `samples` in parallel.
    ///
    /// # Returns
    /// One log-density per row, in row order.
    fn log_density_batch(
        &self,
        data: &ObservationBatch,
        samples: &ArrayView2<f64>,
    ) -> Result<Array1<f64>> {
        if samples.ncols() != self.n_params() {
            return Err(BnnError::shape_mismatch(
                format!("{} columns per parameter sample", self.n_params()),
                format!("{} columns", samples.ncols()),
            ));
        }
        log::debug!(
            "{}: evaluating {} parameter samples on {} observations",
            self.name(),
            samples.nrows(),
            data.len()
        );

        let values = (0..samples.nrows())
            .into_par_iter()
            .map(|i| self.log_density(data, &samples.row(i)))
            .collect::<Result<Vec<f64>>>()?;
        Ok(Array1::from_vec(values))
    }

    /// Draw parameter vectors from the prior, one per row.
    fn sample_prior(&self, n_samples: usize, seed: u64) -> Result<Array2<f64>> {
        let n_params = self.n_params();
        let total = n_samples.checked_mul(n_params).ok_or_else(|| {
            BnnError::InvalidParameter(format!(
                "{} samples of {} parameters overflow usize",
                n_samples, n_params
            ))
        })?;
        let draws = self.prior().sample(total, seed)?;
        Ok(Array2::from_shape_vec((n_samples, n_params), draws.to_vec())?)
    }
}

pub(crate) fn check_n_params(expected: usize, params: &ArrayView1<f64>) -> Result<()> {
    if params.len() != expected {
        return Err(BnnError::shape_mismatch(
            format!("parameter vector of length {}", expected),
            format!("length {}", params.len()),
        ));
    }
    Ok(())
}

/// Borrow `params` as a contiguous slice, copying only strided views.
pub(crate) fn contiguous<'a>(params: &'a ArrayView1<'_, f64>) -> Cow<'a, [f64]> {
    match params.as_slice() {
        Some(slice) => Cow::Borrowed(slice),
        None => Cow::Owned(params.to_vec()),
    }
}
