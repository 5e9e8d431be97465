//! In-memory cancellation registry.
//!
//! One mutex guards the whole map. Triggering a `CancellationToken` never
//! blocks, so `register` may do it under the lock.

use crate::domain::{CancellationHandle, RegistrySnapshot, RegistryStats};
use crate::ports::CancellationRegistry;
use parking_lot::Mutex;
use shared_types::{ClientKey, JobId};
use std::collections::HashMap;
use std::sync::atomic::Ordering;
use tracing::{debug, info};

/// Process-wide registry of the active job per client key.
#[derive(Debug, Default)]
pub struct InMemoryCancellationRegistry {
    entries: Mutex<HashMap<ClientKey, CancellationHandle>>,
    stats: RegistryStats,
}

impl InMemoryCancellationRegistry {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CancellationRegistry for InMemoryCancellationRegistry {
    fn supersede(&self, key: &ClientKey) -> Option<JobId> {
        let previous = self.entries.lock().remove(key)?;

        previous.cancel();
        self.stats.total_superseded.fetch_add(1, Ordering::Relaxed);
        debug!(
            client = %key,
            superseded_job = %previous.job_id(),
            "Cancelled previous job for client"
        );
        Some(previous.job_id())
    }

    fn register(&self, key: ClientKey, handle: CancellationHandle) {
        let job_id = handle.job_id();
        let displaced = {
            let mut entries = self.entries.lock();
            let displaced = entries.insert(key.clone(), handle);
            if let Some(ref old) = displaced {
                if old.job_id() != job_id {
                    old.cancel();
                }
            }
            displaced
        };

        self.stats.total_registered.fetch_add(1, Ordering::Relaxed);
        if let Some(old) = displaced.filter(|old| old.job_id() != job_id) {
            self.stats.total_displaced.fetch_add(1, Ordering::Relaxed);
            debug!(
                client = %key,
                job_id = %job_id,
                displaced_job = %old.job_id(),
                "Registration displaced a racing job"
            );
        }
    }

    fn release(&self, key: &ClientKey, job_id: JobId) -> bool {
        let mut entries = self.entries.lock();
        match entries.get(key) {
            Some(current) if current.job_id() == job_id => {
                entries.remove(key);
                drop(entries);
                self.stats.total_released.fetch_add(1, Ordering::Relaxed);
                true
            }
            _ => false,
        }
    }

    fn active_job(&self, key: &ClientKey) -> Option<JobId> {
        self.entries.lock().get(key).map(CancellationHandle::job_id)
    }

    fn active_count(&self) -> usize {
        self.entries.lock().len()
    }

    fn cancel_all(&self) -> usize {
        let drained: Vec<CancellationHandle> = {
            let mut entries = self.entries.lock();
            entries.drain().map(|(_, handle)| handle).collect()
        };
        for handle in &drained {
            handle.cancel();
        }
        if !drained.is_empty() {
            info!(cancelled = drained.len(), "Cancelled all active jobs");
        }
        drained.len()
    }

    fn stats(&self) -> RegistrySnapshot {
        let active = self.active_count();
        self.stats.snapshot(active)
    }
}
