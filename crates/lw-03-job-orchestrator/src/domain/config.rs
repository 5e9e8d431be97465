//! Job configuration.

use super::errors::ConfigError;
use serde::{Deserialize, Serialize};

/// Limits applied to every job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JobConfig {
    /// Size used when the parameter is missing, malformed or non-positive
    pub default_size: usize,
    /// Largest size that is computed; anything above parks until superseded
    pub max_size: usize,
    /// Generated values are drawn from `[0, value_upper_bound)`
    pub value_upper_bound: i64,
}

impl Default for JobConfig {
    fn default() -> Self {
        Self {
            default_size: 100,
            max_size: 2000,
            value_upper_bound: 100,
        }
    }
}

impl JobConfig {
    /// Largest accepted `max_size`. Keeps `size * size` cell counts well
    /// inside `usize`.
    pub const MAX_SIZE_LIMIT: usize = 1 << 16;

    /// Validate configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.default_size == 0 {
            return Err(ConfigError::InvalidDefaultSize);
        }
        if self.max_size < self.default_size {
            return Err(ConfigError::MaxBelowDefault {
                max: self.max_size,
                default: self.default_size,
            });
        }
        if self.max_size > Self::MAX_SIZE_LIMIT {
            return Err(ConfigError::MaxSizeTooLarge {
                max: self.max_size,
                limit: Self::MAX_SIZE_LIMIT,
            });
        }
        if self.value_upper_bound < 1 {
            return Err(ConfigError::InvalidValueBound(self.value_upper_bound));
        }
        Ok(())
    }
}
