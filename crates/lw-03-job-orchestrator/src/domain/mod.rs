//! # Domain Layer - Job Orchestrator
//!
//! - `config`: job limits and their validation
//! - `sizing`: raw size parameter to a compute/oversize decision
//! - `outcome`: terminal job states and their response text
//! - `history`: request records and pagination
//! - `stats`: per-orchestrator outcome counters

pub mod config;
pub mod errors;
pub mod history;
pub mod outcome;
pub mod sizing;
pub mod stats;

pub use config::*;
pub use errors::*;
pub use history::*;
pub use outcome::*;
pub use sizing::*;
pub use stats::*;
