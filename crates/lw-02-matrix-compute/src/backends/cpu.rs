//! CPU compute backend using Rayon
//!
//! Each output row is one Rayon task. The whole fan-out runs inside
//! `spawn_blocking`, so the calling async task only awaits the join.

use crate::kernel::multiply_row;
use crate::{Backend, ComputeError, EngineInfo, MatrixEngine, Product};
use rayon::prelude::*;
use shared_types::Matrix;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// CPU-based matrix engine using Rayon
pub struct CpuEngine {
    info: EngineInfo,
}

impl CpuEngine {
    pub fn new() -> Self {
        let num_cpus = num_cpus::get() as u32;

        Self {
            info: EngineInfo {
                name: format!("CPU ({} cores)", num_cpus),
                backend: Backend::Cpu,
                compute_units: num_cpus,
            },
        }
    }
}

impl Default for CpuEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Runs every row task to completion or cancellation, then joins.
fn multiply_blocking(a: &Matrix, b: &Matrix, cancel: &CancellationToken) -> Product {
    let n = a.size();
    let mut out = Matrix::zeros(n);
    if n == 0 {
        return Product {
            matrix: out,
            rows_completed: 0,
            cancelled: cancel.is_cancelled(),
        };
    }

    let rows_completed = AtomicUsize::new(0);
    out.as_mut_slice()
        .par_chunks_mut(n)
        .enumerate()
        .with_max_len(1)
        .for_each(|(row, cells)| {
            if multiply_row(a, b, row, cells, cancel) {
                rows_completed.fetch_add(1, Ordering::Relaxed);
            }
        });

    Product {
        matrix: out,
        rows_completed: rows_completed.into_inner(),
        cancelled: cancel.is_cancelled(),
    }
}

#[async_trait::async_trait]
impl MatrixEngine for CpuEngine {
    fn backend(&self) -> Backend {
        Backend::Cpu
    }

    fn info(&self) -> &EngineInfo {
        &self.info
    }

    async fn multiply(
        &self,
        a: Arc<Matrix>,
        b: Arc<Matrix>,
        cancel: CancellationToken,
    ) -> Result<Product, ComputeError> {
        if a.size() != b.size() {
            return Err(ComputeError::InvalidInput(format!(
                "dimension mismatch: {}x{} times {}x{}",
                a.size(),
                a.size(),
                b.size(),
                b.size()
            )));
        }

        let size = a.size();
        let product = tokio::task::spawn_blocking(move || multiply_blocking(&a, &b, &cancel))
            .await
            .map_err(|e| ComputeError::TaskFailed(e.to_string()))?;

        debug!(
            size,
            rows_completed = product.rows_completed,
            cancelled = product.cancelled,
            "Row tasks joined"
        );
        Ok(product)
    }
}
