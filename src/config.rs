//! Hyperparameters captured when an evaluator is built.

use crate::error::{BnnError, Result};
use crate::network::{FinalLayer, LayerSizes};
use crate::nonlinearity::Nonlinearity;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Immutable configuration of a Bayesian feed-forward network.
///
/// # Examples
///
/// ```
/// use bayesnn::config::BnnConfig;
///
/// let config = BnnConfig::from_json_str(
///     r#"{ "layer_sizes": [1, 10, 1], "nonlinearity": "tanh", "lik_std": 0.1, "prior_std": 1.0 }"#,
/// )
/// .unwrap();
/// assert_eq!(config.layer_sizes.n_params(), 31);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BnnConfig {
    /// Layer widths from input to output.
    pub layer_sizes: LayerSizes,
    /// Elementwise activation between layers.
    #[serde(default)]
    pub nonlinearity: Nonlinearity,
    /// Whether the output layer is passed through the nonlinearity too.
    #[serde(default)]
    pub final_layer: FinalLayer,
    /// Standard deviation of the Gaussian observation noise.
    pub lik_std: f64,
    /// Standard deviation of the zero-mean Gaussian prior on every parameter.
    pub prior_std: f64,
}

impl Default for BnnConfig {
    fn default() -> Self {
        Self {
            layer_sizes: LayerSizes(vec![1, 2, 1]),
            nonlinearity: Nonlinearity::Tanh,
            final_layer: FinalLayer::Nonlinear,
            lik_std: 0.1,
            prior_std: 1.0,
        }
    }
}

impl BnnConfig {
    pub fn new(
        layer_sizes: Vec<usize>,
        nonlinearity: Nonlinearity,
        lik_std: f64,
        prior_std: f64,
    ) -> Result<Self> {
        let config = Self {
            layer_sizes: LayerSizes::new(layer_sizes)?,
            nonlinearity,
            final_layer: FinalLayer::Nonlinear,
            lik_std,
            prior_std,
        };
        config.validate()?;
        Ok(config)
    }

    /// Replace the output layer behavior.
    pub fn with_final_layer(mut self, final_layer: FinalLayer) -> Self {
        self.final_layer = final_layer;
        self
    }

    /// Check the invariants that the layer schedule alone cannot express.
    pub fn validate(&self) -> Result<()> {
        if self.layer_sizes.output_size() != 1 {
            return Err(BnnError::InvalidParameter(format!(
                "output layer must have width 1 for scalar targets, got {}",
                self.layer_sizes.output_size()
            )));
        }
        check_std("lik_std", self.lik_std)?;
        check_std("prior_std", self.prior_std)?;
        Ok(())
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        if config.final_layer == FinalLayer::Nonlinear && config.nonlinearity.is_bounded() {
            log::warn!(
                "{} is applied to the output layer; predictions are confined to its range",
                config.nonlinearity.name()
            );
        }
        Ok(config)
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        fs::write(path, self.to_json_string()?)?;
        Ok(())
    }
}

fn check_std(name: &str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(BnnError::InvalidParameter(format!(
            "{} must be positive and finite, got {}",
            name, value
        )))
    }
}
