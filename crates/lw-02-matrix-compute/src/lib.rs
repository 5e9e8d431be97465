//! # Matrix Compute: Cancellable Row-Parallel Multiplication
//!
//! **Component:** 2
//!
//! Computes `C = A × B` for square integer matrices with one task per output
//! row. Every row task checks the job's cancellation token before each
//! column, so a superseded job stops within one cell computation per row.
//!
//! ## Backends
//!
//! - **CPU/Rayon** - always available; rows are distributed over the Rayon
//!   pool from a blocking Tokio task so the async runtime is never stalled.
//!
//! ## Guarantees
//!
//! | Guarantee | Enforcement |
//! |-----------|-------------|
//! | Row `i` is written only by row task `i` | `par_chunks_mut` hands out disjoint row slices |
//! | No row writes after `multiply` returns | Rayon `for_each` joins every row task |
//! | Cancelled products are marked | `Product::cancelled` is read after the join |
//!
//! ## Usage
//!
//! ```rust,ignore
//! use lw_02_matrix_compute::auto_detect;
//!
//! let engine = auto_detect()?;
//! let product = engine.multiply(a, b, token).await?;
//! if !product.cancelled {
//!     println!("{}", product.matrix.render_row(0));
//! }
//! ```

pub mod backends;
pub mod domain;
pub mod kernel;

pub use domain::Product;

use shared_types::Matrix;
use std::sync::Arc;
use thiserror::Error;
use tokio_util::sync::CancellationToken;

/// Compute backend kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    /// CPU with Rayon parallelism
    Cpu,
}

impl std::fmt::Display for Backend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Backend::Cpu => write!(f, "CPU (Rayon)"),
        }
    }
}

/// Compute engine errors
#[derive(Error, Debug)]
pub enum ComputeError {
    #[error("No compute backend available")]
    NoBackendAvailable,

    #[error("Compute task failed: {0}")]
    TaskFailed(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Engine information
#[derive(Debug, Clone)]
pub struct EngineInfo {
    pub name: String,
    pub backend: Backend,
    pub compute_units: u32,
}

/// Matrix engine trait - implemented by all backends
#[async_trait::async_trait]
pub trait MatrixEngine: Send + Sync {
    /// Get backend type
    fn backend(&self) -> Backend;

    /// Get engine info
    fn info(&self) -> &EngineInfo;

    /// Multiplies `a × b`, stopping early once `cancel` is triggered.
    ///
    /// Returns only after every row task has finished. A cancelled run
    /// yields `Ok` with `Product::cancelled` set; its matrix is partial and
    /// must not be shown to anyone.
    async fn multiply(
        &self,
        a: Arc<Matrix>,
        b: Arc<Matrix>,
        cancel: CancellationToken,
    ) -> Result<Product, ComputeError>;
}

/// Auto-detect and create the best available engine
pub fn auto_detect() -> Result<Arc<dyn MatrixEngine>, ComputeError> {
    #[cfg(feature = "cpu")]
    {
        let engine = backends::cpu::CpuEngine::new();
        tracing::info!(
            "Using CPU compute: {} cores (Rayon)",
            engine.info().compute_units
        );
        Ok(Arc::new(engine))
    }

    #[cfg(not(feature = "cpu"))]
    {
        Err(ComputeError::NoBackendAvailable)
    }
}
