//! Densities used for priors and likelihoods.

mod gaussian;

pub use gaussian::{Gaussian, gaussian_log_prob};
