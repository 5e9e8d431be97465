//! # Error Types
//!
//! Defines error types used across crates.

use thiserror::Error;

/// Errors raised when building or combining matrices.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatrixError {
    /// A row does not have the same length as the matrix side.
    #[error("Matrix is not square: row {row} has {actual} cells, expected {expected}")]
    NotSquare {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// Two matrices of different sizes were combined.
    #[error("Dimension mismatch: left is {left}x{left}, right is {right}x{right}")]
    DimensionMismatch { left: usize, right: usize },
}
