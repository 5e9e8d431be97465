//! Outbound (Driven) ports for the Job Orchestrator.
//!
//! These traits define the external systems the orchestrator depends on.

use crate::domain::{HistoryError, RequestRecord};
use shared_types::{ClientKey, Matrix};

/// Request history persistence.
///
/// Failures never change a job's outcome; the orchestrator only logs them.
pub trait RequestHistory: Send + Sync {
    /// Appends a record for a job about to compute.
    ///
    /// # Returns
    /// - `Ok(record)`: the stored record, with its assigned id and timestamp
    /// - `Err`: the backend could not store it
    fn record(&self, key: &ClientKey, matrix_size: usize) -> Result<RequestRecord, HistoryError>;

    /// All records for `key`, ordered by id.
    fn for_client(&self, key: &ClientKey) -> Result<Vec<RequestRecord>, HistoryError>;
}

/// Input matrix generator.
///
/// Abstracted to allow testing with reproducible matrices.
pub trait MatrixSource: Send + Sync {
    /// Generates an N×N matrix with values in `[0, upper)`.
    fn generate(&self, size: usize, upper: i64) -> Matrix;
}
