//! Models that expose a joint log-density over a flat parameter vector.

mod base;
mod bnn;
mod linear;

pub use base::LogDensity;
pub use bnn::BayesianNN;
pub use linear::BayesianLinearRegression;
