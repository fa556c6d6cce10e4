//! Core data types for observation batches.

use crate::error::{BnnError, Result};
use ndarray::{ArrayView1, ArrayView2};

/// Inputs paired with their scalar targets.
///
/// Rows of `inputs` are examples and columns are features. The batch only
/// borrows its data; evaluators never copy or mutate it.
#[derive(Debug, Clone, Copy)]
pub struct ObservationBatch<'a> {
    inputs: ArrayView2<'a, f64>,
    targets: ArrayView1<'a, f64>,
}

impl<'a> ObservationBatch<'a> {
    /// Pair `inputs` with `targets`, checking that both have one entry per example.
    pub fn new(inputs: ArrayView2<'a, f64>, targets: ArrayView1<'a, f64>) -> Result<Self> {
        if inputs.nrows() != targets.len() {
            return Err(BnnError::shape_mismatch(
                format!("{} targets, one per input row", inputs.nrows()),
                format!("{} targets", targets.len()),
            ));
        }
        Ok(Self { inputs, targets })
    }

    pub fn inputs(&self) -> ArrayView2<'a, f64> {
        self.inputs
    }

    pub fn targets(&self) -> ArrayView1<'a, f64> {
        self.targets
    }

    /// Number of examples in the batch.
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    pub fn n_features(&self) -> usize {
        self.inputs.ncols()
    }
}
