//! Bayesian linear regression without intercept.

use super::base::{LogDensity, check_n_params};
use crate::distributions::{Gaussian, gaussian_log_prob};
use crate::error::{BnnError, Result};
use crate::types::ObservationBatch;
use ndarray::{Array1, ArrayView1, ArrayView2};

/// `β ~ N(0, prior_std²)` per feature and `y ~ N(X · β, lik_std²)`.
#[derive(Debug, Clone)]
pub struct BayesianLinearRegression {
    n_features: usize,
    lik_std: f64,
    prior: Gaussian,
}

impl BayesianLinearRegression {
    pub fn new(n_features: usize, lik_std: f64, prior_std: f64) -> Result<Self> {
        if n_features == 0 {
            return Err(BnnError::InvalidParameter(
                "linear regression needs at least one feature".to_string(),
            ));
        }
        // Reuse the Gaussian checks for both scales.
        Gaussian::centered(lik_std)?;
        let prior = Gaussian::centered(prior_std)?;
        Ok(Self {
            n_features,
            lik_std,
            prior,
        })
    }

    pub fn n_features(&self) -> usize {
        self.n_features
    }

    pub fn lik_std(&self) -> f64 {
        self.lik_std
    }

    /// `X · β` for every row of `inputs`.
    pub fn predict(&self, inputs: &ArrayView2<f64>, coef: &ArrayView1<f64>) -> Result<Array1<f64>> {
        check_n_params(self.n_features, coef)?;
        if inputs.ncols() != self.n_features {
            return Err(BnnError::shape_mismatch(
                format!("{} input columns", self.n_features),
                format!("{} columns", inputs.ncols()),
            ));
        }
        Ok(inputs.dot(coef))
    }
}

impl LogDensity for BayesianLinearRegression {
    fn name(&self) -> &'static str {
        "BayesianLinearRegression"
    }

    fn n_params(&self) -> usize {
        self.n_features
    }

    fn prior(&self) -> &Gaussian {
        &self.prior
    }

    fn log_likelihood(&self, data: &ObservationBatch, params: &ArrayView1<f64>) -> Result<f64> {
        let mu = self.predict(&data.inputs(), params)?;
        Ok(data
            .targets()
            .iter()
            .zip(mu.iter())
            .map(|(&y, &m)| gaussian_log_prob(y, m, self.lik_std))
            .sum())
    }
}
