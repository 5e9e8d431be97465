//! Registry statistics.

use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};

/// Running counters for a registry.
#[derive(Debug, Default)]
pub struct RegistryStats {
    /// Handles registered
    pub total_registered: AtomicU64,
    /// Handles cancelled by a newer job for the same key
    pub total_superseded: AtomicU64,
    /// Handles removed by their own job on completion
    pub total_released: AtomicU64,
    /// Handles overwritten by a racing registration
    pub total_displaced: AtomicU64,
}

impl RegistryStats {
    /// Takes a snapshot with the given number of live entries.
    pub fn snapshot(&self, active: usize) -> RegistrySnapshot {
        RegistrySnapshot {
            active,
            registered: self.total_registered.load(Ordering::Relaxed),
            superseded: self.total_superseded.load(Ordering::Relaxed),
            released: self.total_released.load(Ordering::Relaxed),
            displaced: self.total_displaced.load(Ordering::Relaxed),
        }
    }
}

/// Point-in-time view of a registry, serialized into the health endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RegistrySnapshot {
    pub active: usize,
    pub registered: u64,
    pub superseded: u64,
    pub released: u64,
    pub displaced: u64,
}
