//! Bayesian feed-forward network with Gaussian prior and Gaussian noise.

use super::base::{LogDensity, check_n_params, contiguous};
use crate::config::BnnConfig;
use crate::distributions::{Gaussian, gaussian_log_prob};
use crate::error::Result;
use crate::network::{self, LayerSizes, UnpackIter};
use crate::nonlinearity::Nonlinearity;
use crate::types::ObservationBatch;
use ndarray::{Array1, ArrayView1, ArrayView2};

/// Joint log-density of a feed-forward network whose weights and biases are
/// latent variables.
///
/// ```text
/// θ_i ~ N(0, prior_std²)
/// y_j ~ N(f(x_j; θ), lik_std²)
/// ```
///
/// The evaluator holds only its configuration, so it can be shared freely
/// between threads and called with as many parameter vectors as needed.
#[derive(Debug, Clone)]
pub struct BayesianNN {
    config: BnnConfig,
    prior: Gaussian,
}

impl BayesianNN {
    /// Build an evaluator whose output layer also applies `nonlinearity`.
    ///
    /// # Arguments
    /// * `layer_sizes` - Widths from input to output; the last must be 1
    /// * `nonlinearity` - Elementwise activation
    /// * `lik_std` - Observation noise standard deviation
    /// * `prior_std` - Prior standard deviation of every parameter
    pub fn new(
        layer_sizes: Vec<usize>,
        nonlinearity: Nonlinearity,
        lik_std: f64,
        prior_std: f64,
    ) -> Result<Self> {
        Self::from_config(BnnConfig::new(layer_sizes, nonlinearity, lik_std, prior_std)?)
    }

    pub fn from_config(config: BnnConfig) -> Result<Self> {
        config.validate()?;
        let prior = Gaussian::centered(config.prior_std)?;
        log::debug!(
            "BayesianNN: layers={:?} nonlinearity={} final_layer={:?} n_params={}",
            config.layer_sizes.as_slice(),
            config.nonlinearity.name(),
            config.final_layer,
            config.layer_sizes.n_params()
        );
        Ok(Self { config, prior })
    }

    pub fn config(&self) -> &BnnConfig {
        &self.config
    }

    pub fn layer_sizes(&self) -> &LayerSizes {
        &self.config.layer_sizes
    }

    /// Split a parameter vector into per-layer weight and bias views.
    pub fn unpack<'a>(&'a self, params: &'a [f64]) -> Result<UnpackIter<'a>> {
        network::unpack(params, &self.config.layer_sizes)
    }

    /// Network output for every row of `inputs`.
    pub fn predict(&self, inputs: &ArrayView2<f64>, params: &ArrayView1<f64>) -> Result<Array1<f64>> {
        let flat = contiguous(params);
        let layers = self.unpack(&flat)?;
        network::forward(
            inputs,
            layers,
            self.config.nonlinearity,
            self.config.final_layer,
        )
    }

    /// Joint log-density of `targets` given `inputs` at `params`.
    pub fn evaluate(
        &self,
        inputs: &ArrayView2<f64>,
        targets: &ArrayView1<f64>,
        params: &ArrayView1<f64>,
    ) -> Result<f64> {
        let data = ObservationBatch::new(inputs.view(), targets.view())?;
        self.log_density(&data, params)
    }
}

impl LogDensity for BayesianNN {
    fn name(&self) -> &'static str {
        "BayesianNN"
    }

    fn n_params(&self) -> usize {
        self.config.layer_sizes.n_params()
    }

    fn prior(&self) -> &Gaussian {
        &self.prior
    }

    fn log_likelihood(&self, data: &ObservationBatch, params: &ArrayView1<f64>) -> Result<f64> {
        check_n_params(self.n_params(), params)?;
        let mu = self.predict(&data.inputs(), params)?;
        let lik_std = self.config.lik_std;
        Ok(data
            .targets()
            .iter()
            .zip(mu.iter())
            .map(|(&y, &m)| gaussian_log_prob(y, m, lik_std))
            .sum())
    }
}
