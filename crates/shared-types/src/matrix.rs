//! # Square Integer Matrices
//!
//! A [`Matrix`] is an N×N grid of `i64` stored row-major. Arithmetic wraps at
//! the native 64-bit width; no overflow handling is performed.

use crate::errors::MatrixError;
use rand::Rng;
use std::fmt::Write as _;

/// Square matrix of 64-bit integers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    size: usize,
    cells: Vec<i64>,
}

impl Matrix {
    /// Creates an N×N matrix of zeros.
    pub fn zeros(size: usize) -> Self {
        Self {
            size,
            cells: vec![0; size * size],
        }
    }

    /// Builds a matrix from explicit rows.
    ///
    /// # Errors
    /// `NotSquare` if any row length differs from the number of rows.
    pub fn from_rows(rows: Vec<Vec<i64>>) -> Result<Self, MatrixError> {
        let size = rows.len();
        let mut cells = Vec::with_capacity(size * size);
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != size {
                return Err(MatrixError::NotSquare {
                    row,
                    expected: size,
                    actual: values.len(),
                });
            }
            cells.extend(values);
        }
        Ok(Self { size, cells })
    }

    /// Fills an N×N matrix with values drawn uniformly from `[0, upper)`.
    ///
    /// `upper` must be positive.
    pub fn random<R: Rng + ?Sized>(size: usize, upper: i64, rng: &mut R) -> Self {
        let cells = (0..size * size).map(|_| rng.gen_range(0..upper)).collect();
        Self { size, cells }
    }

    /// Side length N.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Cell at `(row, col)`.
    ///
    /// # Panics
    /// If either index is out of bounds.
    pub fn get(&self, row: usize, col: usize) -> i64 {
        assert!(row < self.size && col < self.size, "index out of bounds");
        self.cells[row * self.size + col]
    }

    /// Row `i` as a slice.
    pub fn row(&self, i: usize) -> &[i64] {
        let start = i * self.size;
        &self.cells[start..start + self.size]
    }

    /// Iterates over rows in order.
    pub fn rows(&self) -> impl Iterator<Item = &[i64]> {
        self.cells.chunks(self.size.max(1))
    }

    /// All cells, row-major.
    pub fn as_slice(&self) -> &[i64] {
        &self.cells
    }

    /// All cells, row-major and mutable. Row `i` is
    /// `[i * size, (i + 1) * size)`.
    pub fn as_mut_slice(&mut self) -> &mut [i64] {
        &mut self.cells
    }

    /// Plain triple-loop product, used as the verification baseline for the
    /// parallel engine.
    ///
    /// # Errors
    /// `DimensionMismatch` when the two sides differ.
    pub fn reference_multiply(&self, other: &Matrix) -> Result<Matrix, MatrixError> {
        if self.size != other.size {
            return Err(MatrixError::DimensionMismatch {
                left: self.size,
                right: other.size,
            });
        }

        let n = self.size;
        let mut out = Matrix::zeros(n);
        for i in 0..n {
            for j in 0..n {
                let mut acc: i64 = 0;
                for k in 0..n {
                    acc = acc.wrapping_add(self.get(i, k).wrapping_mul(other.get(k, j)));
                }
                out.cells[i * n + j] = acc;
            }
        }
        Ok(out)
    }

    /// Renders row `i` as a bracketed, space-separated list: `[1 2 3]`.
    pub fn render_row(&self, i: usize) -> String {
        render_values(self.row(i))
    }
}

fn render_values(values: &[i64]) -> String {
    let mut line = String::with_capacity(values.len() * 6 + 2);
    line.push('[');
    for (idx, value) in values.iter().enumerate() {
        if idx > 0 {
            line.push(' ');
        }
        // Writing into a String cannot fail.
        let _ = write!(line, "{value}");
    }
    line.push(']');
    line
}
