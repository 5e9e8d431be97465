//! Orchestrator error types.

use thiserror::Error;

/// Invalid job configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("default matrix size must be at least 1")]
    InvalidDefaultSize,

    #[error("max matrix size {max} is below the default size {default}")]
    MaxBelowDefault { max: usize, default: usize },

    #[error("max matrix size {max} exceeds the supported limit {limit}")]
    MaxSizeTooLarge { max: usize, limit: usize },

    #[error("value upper bound must be at least 1, got {0}")]
    InvalidValueBound(i64),
}

/// Request history failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HistoryError {
    #[error("history backend unavailable: {0}")]
    Unavailable(String),
}
