//! Layer width schedule.

use crate::error::{BnnError, Result};
use serde::{Deserialize, Serialize};

/// Widths of each layer from input to output.
///
/// Holds at least two layers, and every width is positive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<usize>", into = "Vec<usize>")]
pub struct LayerSizes(pub(crate) Vec<usize>);

impl LayerSizes {
    pub fn new(sizes: Vec<usize>) -> Result<Self> {
        if sizes.len() < 2 {
            return Err(BnnError::InvalidParameter(format!(
                "layer schedule needs at least 2 layers, got {}",
                sizes.len()
            )));
        }
        if let Some(pos) = sizes.iter().position(|&s| s == 0) {
            return Err(BnnError::InvalidParameter(format!(
                "layer {} has zero width",
                pos
            )));
        }
        Ok(Self(sizes))
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    pub fn input_size(&self) -> usize {
        self.0[0]
    }

    pub fn output_size(&self) -> usize {
        self.0[self.0.len() - 1]
    }

    /// Number of layer transitions, i.e. weight/bias pairs.
    pub fn n_layers(&self) -> usize {
        self.0.len() - 1
    }

    /// Consecutive `(fan_in, fan_out)` pairs.
    pub fn transitions(&self) -> impl ExactSizeIterator<Item = (usize, usize)> + '_ {
        self.0.windows(2).map(|w| (w[0], w[1]))
    }

    /// Length of a parameter vector for this schedule: Σ (m + 1) · n.
    pub fn n_params(&self) -> usize {
        self.transitions().map(|(m, n)| (m + 1) * n).sum()
    }
}

impl TryFrom<Vec<usize>> for LayerSizes {
    type Error = BnnError;

    fn try_from(sizes: Vec<usize>) -> Result<Self> {
        Self::new(sizes)
    }
}

impl From<LayerSizes> for Vec<usize> {
    fn from(sizes: LayerSizes) -> Self {
        sizes.0
    }
}
