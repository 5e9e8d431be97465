//! Inbound (Driving) Port - Cancellation Registry API
//!
//! This is the API the job orchestrator uses to enforce latest-wins.

use crate::domain::{CancellationHandle, RegistrySnapshot};
use shared_types::{ClientKey, JobId};

/// Primary API for the Cancellation Registry.
///
/// Every method completes in bounded time: implementations hold their lock
/// only for a single map operation plus, at most, triggering a token.
pub trait CancellationRegistry: Send + Sync {
    /// Cancels and removes the handle currently stored for `key`.
    ///
    /// Returns the job that was superseded, or `None` when the key had no
    /// active job. Calling this for an absent key is a no-op.
    fn supersede(&self, key: &ClientKey) -> Option<JobId>;

    /// Stores `handle` as the active handle for `key`.
    ///
    /// # Invariants
    ///
    /// - Overwrites any existing entry.
    /// - A displaced entry belonging to a different job is cancelled, so
    ///   two racing registrations never leave two live handles for one key.
    fn register(&self, key: ClientKey, handle: CancellationHandle);

    /// Removes the entry for `key` only if it still belongs to `job_id`.
    ///
    /// Returns `true` if an entry was removed. A job that was already
    /// superseded must not delete its successor's handle.
    fn release(&self, key: &ClientKey, job_id: JobId) -> bool;

    /// The job currently registered for `key`, if any.
    fn active_job(&self, key: &ClientKey) -> Option<JobId>;

    /// Number of keys with a registered handle.
    fn active_count(&self) -> usize;

    /// Cancels and removes every registered handle. Returns how many were
    /// cancelled. Used on shutdown.
    fn cancel_all(&self) -> usize;

    /// Current counters.
    fn stats(&self) -> RegistrySnapshot;
}
