//! Domain layer for matrix compute.

use shared_types::Matrix;

/// Result of one multiplication run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    /// The output matrix. Only meaningful when `cancelled` is false.
    pub matrix: Matrix,
    /// Rows that ran to the last column.
    pub rows_completed: usize,
    /// Whether cancellation was observed after the row tasks joined.
    pub cancelled: bool,
}

impl Product {
    /// True when every row finished and no cancellation was observed.
    pub fn is_complete(&self) -> bool {
        !self.cancelled && self.rows_completed == self.matrix.size()
    }
}
