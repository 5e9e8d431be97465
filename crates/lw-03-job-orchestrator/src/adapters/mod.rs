//! Adapters for the orchestrator's outbound ports.

pub mod history;
pub mod matrix_source;

pub use history::InMemoryRequestHistory;
pub use matrix_source::{RandomMatrixSource, SeededMatrixSource};
