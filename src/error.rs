//! Error types for bayesnn.

use ndarray::ShapeError;
use thiserror::Error;

/// Result type alias for bayesnn operations.
pub type Result<T> = std::result::Result<T, BnnError>;

/// Errors that can occur when building or evaluating a model.
#[derive(Error, Debug)]
pub enum BnnError {
    /// A parameter vector or input batch disagrees with the layer schedule.
    #[error("Shape mismatch: expected {expected_shape}, got {actual_shape}")]
    ShapeMismatch {
        expected_shape: String,
        actual_shape: String,
    },
    /// Invalid hyperparameter or layer schedule.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
    /// An IO error.
    #[error("IO error: {0}")]
    IoError(String),
    /// A serialization error.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl BnnError {
    pub(crate) fn shape_mismatch(expected: impl ToString, actual: impl ToString) -> Self {
        BnnError::ShapeMismatch {
            expected_shape: expected.to_string(),
            actual_shape: actual.to_string(),
        }
    }
}

impl From<ShapeError> for BnnError {
    fn from(err: ShapeError) -> Self {
        BnnError::ShapeMismatch {
            expected_shape: "unknown".to_string(),
            actual_shape: err.to_string(),
        }
    }
}

impl From<std::io::Error> for BnnError {
    fn from(err: std::io::Error) -> Self {
        BnnError::IoError(err.to_string())
    }
}

impl From<serde_json::Error> for BnnError {
    fn from(err: serde_json::Error) -> Self {
        BnnError::SerializationError(err.to_string())
    }
}
