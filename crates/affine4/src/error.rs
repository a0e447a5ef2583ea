//! Error types for matrix operations

use thiserror::Error;

/// Errors that can occur when working with transform matrices
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatrixError {
    /// The matrix has no inverse (zero determinant)
    #[error("Matrix is singular and cannot be inverted")]
    Singular,

    /// A component slice was neither a 2- nor a 3-component value
    #[error("Unsupported component count: expected 2 or 3, got {0}")]
    UnsupportedComponents(usize),
}

/// Result type for matrix operations
pub type MatrixResult<T> = Result<T, MatrixError>;
