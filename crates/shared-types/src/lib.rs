//! # Shared Types Crate
//!
//! This crate contains the domain entities passed between the cancellation
//! registry, the matrix compute engine, the job orchestrator and the API
//! gateway.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All cross-crate types are defined here.
//! - **Keys are strings**: A [`ClientKey`] is compared by plain string
//!   equality; nothing here enforces uniqueness beyond that.
//! - **Row-major matrices**: [`Matrix`] stores its cells contiguously so the
//!   compute engine can hand one row slice to each row task.

pub mod entities;
pub mod errors;
pub mod matrix;

pub use entities::*;
pub use errors::*;
pub use matrix::Matrix;
