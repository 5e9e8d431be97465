//! # Domain Layer - Cancellation Registry
//!
//! - `handle`: CancellationHandle, the token a job's row tasks observe
//! - `stats`: counters and point-in-time snapshots

pub mod handle;
pub mod stats;

pub use handle::*;
pub use stats::*;
