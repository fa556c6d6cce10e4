//! Forward pass through the unpacked layers.

use super::params::LayerParams;
use crate::error::{BnnError, Result};
use crate::nonlinearity::Nonlinearity;
use ndarray::{Array1, Array2, ArrayView2};
use serde::{Deserialize, Serialize};

/// What happens after the output layer's affine transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FinalLayer {
    /// Apply the nonlinearity after every layer, the output layer included.
    ///
    /// With a bounded nonlinearity such as tanh, predictions stay inside its range.
    #[default]
    Nonlinear,
    /// Leave the output layer affine.
    Linear,
}

/// Run `inputs` through `layers`, returning the final activations.
///
/// Each layer computes `h · W + b` with the bias broadcast over rows, then the
/// nonlinearity. The column count must match each layer's fan-in.
pub fn forward_matrix<'a, I>(
    inputs: &ArrayView2<f64>,
    layers: I,
    nonlinearity: Nonlinearity,
    final_layer: FinalLayer,
) -> Result<Array2<f64>>
where
    I: IntoIterator<Item = LayerParams<'a>>,
    I::IntoIter: ExactSizeIterator,
{
    let layers = layers.into_iter();
    let n_layers = layers.len();
    let mut h = inputs.to_owned();

    for (idx, layer) in layers.enumerate() {
        if h.ncols() != layer.fan_in() {
            return Err(BnnError::shape_mismatch(
                format!("{} columns entering layer {}", layer.fan_in(), idx),
                format!("{} columns", h.ncols()),
            ));
        }
        let mut z = h.dot(&layer.weights) + &layer.biases;
        let is_output = idx + 1 == n_layers;
        if !(is_output && final_layer == FinalLayer::Linear) {
            nonlinearity.apply_inplace(&mut z);
        }
        h = z;
    }

    Ok(h)
}

/// Forward pass collapsed to one scalar per example.
///
/// The last layer must have exactly one unit.
pub fn forward<'a, I>(
    inputs: &ArrayView2<f64>,
    layers: I,
    nonlinearity: Nonlinearity,
    final_layer: FinalLayer,
) -> Result<Array1<f64>>
where
    I: IntoIterator<Item = LayerParams<'a>>,
    I::IntoIter: ExactSizeIterator,
{
    let out = forward_matrix(inputs, layers, nonlinearity, final_layer)?;
    if out.ncols() != 1 {
        return Err(BnnError::shape_mismatch(
            "a single output column",
            format!("{} columns", out.ncols()),
        ));
    }
    Ok(out.column(0).to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::{LayerSizes, unpack};
    use approx::assert_relative_eq;
    use ndarray::array;

    #[test]
    fn test_forward_single_layer() {
        let sizes = LayerSizes::new(vec![2, 1]).unwrap();
        // w = [[2], [3]], b = [1]
        let params = [2.0, 3.0, 1.0];
        let x = array![[1.0, 1.0], [0.0, -1.0]];

        let linear = forward(
            &x.view(),
            unpack(&params, &sizes).unwrap(),
            Nonlinearity::Tanh,
            FinalLayer::Linear,
        )
        .unwrap();
        assert_eq!(linear, array![6.0, -2.0]);

        let squashed = forward(
            &x.view(),
            unpack(&params, &sizes).unwrap(),
            Nonlinearity::Tanh,
            FinalLayer::Nonlinear,
        )
        .unwrap();
        assert_relative_eq!(squashed[0], 6.0_f64.tanh());
        assert_relative_eq!(squashed[1], (-2.0_f64).tanh());
    }

    #[test]
    fn test_forward_hidden_layer() {
        let sizes = LayerSizes::new(vec![1, 2, 1]).unwrap();
        // W1 = [[1, -1]], b1 = [0, 0.5], W2 = [[2], [1]], b2 = [-1]
        let params = [1.0, -1.0, 0.0, 0.5, 2.0, 1.0, -1.0];
        let x = array![[0.5]];

        let out = forward(
            &x.view(),
            unpack(&params, &sizes).unwrap(),
            Nonlinearity::Relu,
            FinalLayer::Linear,
        )
        .unwrap();
        // hidden = relu([0.5, 0.0]) = [0.5, 0.0]; out = 1.0 + 0.0 - 1.0
        assert_relative_eq!(out[0], 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_forward_zero_params() {
        let sizes = LayerSizes::new(vec![3, 4, 1]).unwrap();
        let params = vec![0.0; sizes.n_params()];
        let x = array![[1.0, 2.0, 3.0], [-4.0, 5.0, 0.5]];

        let out = forward(
            &x.view(),
            unpack(&params, &sizes).unwrap(),
            Nonlinearity::Sigmoid,
            FinalLayer::Nonlinear,
        )
        .unwrap();
        assert_eq!(out, array![0.5, 0.5]);
    }

    #[test]
    fn test_forward_column_mismatch() {
        let sizes = LayerSizes::new(vec![2, 1]).unwrap();
        let params = [0.0; 3];
        let x = array![[1.0, 2.0, 3.0]];

        let result = forward(
            &x.view(),
            unpack(&params, &sizes).unwrap(),
            Nonlinearity::Tanh,
            FinalLayer::Nonlinear,
        );
        assert!(matches!(result, Err(BnnError::ShapeMismatch { .. })));
    }

    #[test]
    fn test_forward_requires_single_output() {
        let sizes = LayerSizes::new(vec![1, 2]).unwrap();
        let params = [0.0; 4];
        let x = array![[1.0]];

        let matrix = forward_matrix(
            &x.view(),
            unpack(&params, &sizes).unwrap(),
            Nonlinearity::Identity,
            FinalLayer::Linear,
        )
        .unwrap();
        assert_eq!(matrix.dim(), (1, 2));

        let result = forward(
            &x.view(),
            unpack(&params, &sizes).unwrap(),
            Nonlinearity::Identity,
            FinalLayer::Linear,
        );
        assert!(matches!(result, Err(BnnError::ShapeMismatch { .. })));
    }
}
