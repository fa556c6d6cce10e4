//! # bayesnn
//!
//! Joint log-density of Bayesian feed-forward networks.
//!
//! Every weight and bias is a latent variable with an independent zero-mean
//! Gaussian prior, and targets are observed with Gaussian noise around the
//! network output. The crate evaluates
//!
//! ```text
//! log p(y, θ | x) = Σ_j log N(y_j; f(x_j; θ), lik_std²) + Σ_i log N(θ_i; 0, prior_std²)
//! ```
//!
//! for a flat parameter vector `θ`, which is the quantity variational and
//! MCMC procedures need. Inference itself is left to the caller.
//!
//! ## Example
//!
//! ```
//! use bayesnn::prelude::*;
//! use ndarray::{Array1, array};
//!
//! let bnn = BayesianNN::new(vec![1, 2, 1], Nonlinearity::Tanh, 0.1, 1.0).unwrap();
//! let params = Array1::zeros(bnn.n_params());
//! let x = array![[0.0]];
//! let y = array![0.0];
//!
//! let log_p = bnn.evaluate(&x.view(), &y.view(), &params.view()).unwrap();
//! assert!((log_p + 5.049).abs() < 1e-3);
//! ```

pub mod config;
pub mod datasets;
pub mod distributions;
pub mod error;
pub mod model;
pub mod network;
pub mod nonlinearity;
pub mod types;

pub mod prelude {
    //! Convenient re-exports of commonly used types.
    pub use crate::config::BnnConfig;
    pub use crate::datasets::build_toy_dataset;
    pub use crate::distributions::Gaussian;
    pub use crate::error::{BnnError, Result};
    pub use crate::model::{BayesianLinearRegression, BayesianNN, LogDensity};
    pub use crate::network::{FinalLayer, LayerParams, LayerSizes, pack, unpack};
    pub use crate::nonlinearity::Nonlinearity;
    pub use crate::types::ObservationBatch;
}
