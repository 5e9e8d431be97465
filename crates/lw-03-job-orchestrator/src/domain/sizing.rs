//! Matrix size resolution.

use super::config::JobConfig;

/// What to do with a request after its size has been resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeDecision {
    /// Multiply two N×N matrices.
    Compute(usize),
    /// Above the gate: wait for cancellation, never compute.
    Oversize(i64),
}

/// Turns the raw `size` query value into a [`SizeDecision`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizePolicy {
    default_size: usize,
    max_size: usize,
}

impl SizePolicy {
    pub fn new(default_size: usize, max_size: usize) -> Self {
        Self {
            default_size,
            max_size,
        }
    }

    pub fn from_config(config: &JobConfig) -> Self {
        Self::new(config.default_size, config.max_size)
    }

    /// Resolves a raw size parameter.
    ///
    /// The value is parsed as a signed 64-bit integer. Missing, non-numeric,
    /// out-of-range and non-positive values fall back to the default size
    /// before the gate is checked.
    pub fn resolve(&self, raw: Option<&str>) -> SizeDecision {
        let requested = raw
            .and_then(|value| value.parse::<i64>().ok())
            .filter(|&n| n > 0);

        let max = i64::try_from(self.max_size).unwrap_or(i64::MAX);

        match requested {
            Some(n) if n > max => SizeDecision::Oversize(n),
            Some(n) => SizeDecision::Compute(n as usize),
            None => SizeDecision::Compute(self.default_size),
        }
    }
}

impl Default for SizePolicy {
    fn default() -> Self {
        Self::from_config(&JobConfig::default())
    }
}
