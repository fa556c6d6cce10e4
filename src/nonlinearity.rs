//! Elementwise nonlinearities applied between affine layers.

use ndarray::{Array2, ArrayView2};
use serde::{Deserialize, Serialize};

/// Activation applied elementwise after each affine transform.
///
/// Named variants are serializable so they can live in a configuration file.
/// `Custom` carries an arbitrary function pointer and only exists in memory.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Nonlinearity {
    /// Hyperbolic tangent, bounded to (-1, 1).
    #[default]
    Tanh,
    /// Identity mapping, which makes every layer purely affine.
    Identity,
    /// Rectified linear unit.
    Relu,
    /// Logistic sigmoid, bounded to (0, 1).
    Sigmoid,
    /// softplus(x) = ln(1 + exp(x))
    Softplus,
    /// Any pure real-to-real function.
    #[serde(skip)]
    Custom(fn(f64) -> f64),
}

impl Nonlinearity {
    /// Apply the nonlinearity to a single value.
    pub fn apply_scalar(&self, x: f64) -> f64 {
        match self {
            Nonlinearity::Tanh => x.tanh(),
            Nonlinearity::Identity => x,
            Nonlinearity::Relu => x.max(0.0),
            Nonlinearity::Sigmoid => sigmoid_scalar(x),
            Nonlinearity::Softplus => softplus_scalar(x),
            Nonlinearity::Custom(f) => f(x),
        }
    }

    /// Apply the nonlinearity to every element of a batch.
    pub fn apply(&self, x: &ArrayView2<f64>) -> Array2<f64> {
        x.mapv(|v| self.apply_scalar(v))
    }

    /// Apply the nonlinearity in place.
    pub fn apply_inplace(&self, x: &mut Array2<f64>) {
        x.mapv_inplace(|v| self.apply_scalar(v));
    }

    /// Whether f(-x) = -f(x) is known to hold.
    ///
    /// Custom functions are never assumed to be odd.
    pub fn is_odd(&self) -> bool {
        matches!(self, Nonlinearity::Tanh | Nonlinearity::Identity)
    }

    /// Whether the range of the function is a bounded interval.
    pub fn is_bounded(&self) -> bool {
        matches!(self, Nonlinearity::Tanh | Nonlinearity::Sigmoid)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Nonlinearity::Tanh => "tanh",
            Nonlinearity::Identity => "identity",
            Nonlinearity::Relu => "relu",
            Nonlinearity::Sigmoid => "sigmoid",
            Nonlinearity::Softplus => "softplus",
            Nonlinearity::Custom(_) => "custom",
        }
    }
}

fn sigmoid_scalar(x: f64) -> f64 {
    if x >= 0.0 {
        1.0 / (1.0 + (-x).exp())
    } else {
        let e = x.exp();
        e / (1.0 + e)
    }
}

fn softplus_scalar(x: f64) -> f64 {
    // ln(1 + e^x) = max(x, 0) + ln(1 + e^-|x|)
    x.max(0.0) + (-x.abs()).exp().ln_1p()
}
