//! Feed-forward network evaluated from a flat parameter vector.
//!
//! The parameter vector is laid out layer by layer. Each layer transition
//! `(m, n)` stores an `m x n` row-major weight matrix followed by `n` biases.

mod layout;
mod params;
mod pass;

pub use layout::LayerSizes;
pub use params::{LayerParams, UnpackIter, pack, unpack};
pub use pass::{FinalLayer, forward, forward_matrix};
