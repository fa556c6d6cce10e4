//! Splitting a flat parameter vector into per-layer views.

use super::layout::LayerSizes;
use crate::error::{BnnError, Result};
use ndarray::{Array1, ArrayView1, ArrayView2};
use std::slice::Windows;

/// Weights and biases of one layer transition, borrowed from the parameter vector.
#[derive(Debug, Clone, Copy)]
pub struct LayerParams<'a> {
    /// `fan_in x fan_out` weight matrix.
    pub weights: ArrayView2<'a, f64>,
    /// `fan_out` biases.
    pub biases: ArrayView1<'a, f64>,
}

impl LayerParams<'_> {
    pub fn fan_in(&self) -> usize {
        self.weights.nrows()
    }

    pub fn fan_out(&self) -> usize {
        self.weights.ncols()
    }
}

/// Lazy iterator over the layers of a parameter vector, input side first.
#[derive(Debug, Clone)]
pub struct UnpackIter<'a> {
    rest: &'a [f64],
    sizes: Windows<'a, usize>,
}

impl<'a> Iterator for UnpackIter<'a> {
    type Item = LayerParams<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let pair = self.sizes.next()?;
        let (m, n) = (pair[0], pair[1]);

        let (w, rest) = self.rest.split_at(m * n);
        let (b, rest) = rest.split_at(n);
        self.rest = rest;

        // Lengths were checked against the schedule in `unpack`.
        let weights = ArrayView2::from_shape((m, n), w).ok()?;
        Some(LayerParams {
            weights,
            biases: ArrayView1::from(b),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.sizes.size_hint()
    }
}

impl ExactSizeIterator for UnpackIter<'_> {}

/// Split `params` into one [`LayerParams`] per layer transition.
///
/// Fails with [`BnnError::ShapeMismatch`] unless `params` has exactly
/// [`LayerSizes::n_params`] entries.
pub fn unpack<'a>(params: &'a [f64], sizes: &'a LayerSizes) -> Result<UnpackIter<'a>> {
    let expected = sizes.n_params();
    if params.len() != expected {
        return Err(BnnError::shape_mismatch(
            format!("parameter vector of length {} for layers {:?}", expected, sizes.as_slice()),
            format!("length {}", params.len()),
        ));
    }
    Ok(UnpackIter {
        rest: params,
        sizes: sizes.as_slice().windows(2),
    })
}

/// Concatenate layers back into a flat parameter vector, weights before biases.
pub fn pack<'a, I>(layers: I) -> Array1<f64>
where
    I: IntoIterator<Item = LayerParams<'a>>,
{
    let mut flat = Vec::new();
    for layer in layers {
        flat.extend(layer.weights.iter());
        flat.extend(layer.biases.iter());
    }
    Array1::from_vec(flat)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_unpack_layout() {
        let sizes = LayerSizes::new(vec![2, 3, 1]).unwrap();
        let params: Vec<f64> = (0..sizes.n_params()).map(|i| i as f64).collect();
        let layers: Vec<_> = unpack(&params, &sizes).unwrap().collect();

        assert_eq!(layers.len(), 2);
        assert_eq!(layers[0].weights, array![[0.0, 1.0, 2.0], [3.0, 4.0, 5.0]]);
        assert_eq!(layers[0].biases, array![6.0, 7.0, 8.0]);
        assert_eq!(layers[1].weights, array![[9.0], [10.0], [11.0]]);
        assert_eq!(layers[1].biases, array![12.0]);
        assert_eq!((layers[1].fan_in(), layers[1].fan_out()), (3, 1));
    }

    #[test]
    fn test_unpack_is_lazy_and_exact_size() {
        let sizes = LayerSizes::new(vec![1, 4, 4, 1]).unwrap();
        let params = vec![0.0; sizes.n_params()];
        let mut iter = unpack(&params, &sizes).unwrap();

        assert_eq!(iter.len(), 3);
        iter.next();
        assert_eq!(iter.len(), 2);
    }

    #[test]
    fn test_unpack_borrows_without_copy() {
        let sizes = LayerSizes::new(vec![1, 2, 1]).unwrap();
        let params = vec![1.0; 7];
        let first = unpack(&params, &sizes).unwrap().next().unwrap();
        assert_eq!(first.weights.as_ptr(), params.as_ptr());
    }

    #[test]
    fn test_unpack_length_mismatch() {
        let sizes = LayerSizes::new(vec![1, 2, 1]).unwrap();
        for len in [0, 6, 8] {
            let params = vec![0.0; len];
            let result = unpack(&params, &sizes);
            assert!(matches!(result, Err(BnnError::ShapeMismatch { .. })));
        }
    }

    #[test]
    fn test_pack_round_trip() {
        for schedule in [vec![1, 1], vec![1, 2, 1], vec![3, 5, 2, 1], vec![4, 1, 6]] {
            let sizes = LayerSizes::new(schedule).unwrap();
            let params: Vec<f64> = (0..sizes.n_params()).map(|i| (i as f64).sin()).collect();
            let packed = pack(unpack(&params, &sizes).unwrap());
            assert_eq!(packed.to_vec(), params);
        }
    }
}
