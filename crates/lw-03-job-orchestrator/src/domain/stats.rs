//! Job outcome counters.

use super::outcome::JobOutcome;
use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};

/// Per-orchestrator counters.
#[derive(Debug, Default)]
pub struct JobStats {
    pub accepted: AtomicU64,
    pub superseded: AtomicU64,
    pub completed: AtomicU64,
    pub cancelled: AtomicU64,
    pub rejected_oversize: AtomicU64,
    pub failed: AtomicU64,
}

impl JobStats {
    pub fn record_outcome(&self, outcome: &JobOutcome) {
        let counter = match outcome {
            JobOutcome::Completed(_) => &self.completed,
            JobOutcome::Cancelled => &self.cancelled,
            JobOutcome::RejectedOversize => &self.rejected_oversize,
            JobOutcome::Failed(_) => &self.failed,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> JobStatsSnapshot {
        JobStatsSnapshot {
            accepted: self.accepted.load(Ordering::Relaxed),
            superseded: self.superseded.load(Ordering::Relaxed),
            completed: self.completed.load(Ordering::Relaxed),
            cancelled: self.cancelled.load(Ordering::Relaxed),
            rejected_oversize: self.rejected_oversize.load(Ordering::Relaxed),
            failed: self.failed.load(Ordering::Relaxed),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct JobStatsSnapshot {
    pub accepted: u64,
    pub superseded: u64,
    pub completed: u64,
    pub cancelled: u64,
    pub rejected_oversize: u64,
    pub failed: u64,
}
