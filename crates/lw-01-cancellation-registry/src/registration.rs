//! Admission of a new job and its scoped registration.
//!
//! [`admit`] performs the supersede-then-register sequence. The returned
//! [`Registration`] releases the entry when dropped, whether the job
//! finished, was cancelled, or its caller went away.

use crate::domain::CancellationHandle;
use crate::ports::CancellationRegistry;
use shared_types::{ClientKey, JobId};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::trace;

/// Admits a new job for `key`.
///
/// The previous job for `key`, if any, is cancelled before the new handle
/// is registered.
pub fn admit(registry: &Arc<dyn CancellationRegistry>, key: ClientKey) -> Registration {
    let superseded = registry.supersede(&key);
    let handle = CancellationHandle::new();
    registry.register(key.clone(), handle.clone());
    trace!(client = %key, job_id = %handle.job_id(), "Job admitted");

    Registration {
        registry: Arc::clone(registry),
        key,
        handle,
        superseded,
    }
}

/// A job's live entry in the registry.
///
/// Dropping the registration triggers its own handle (stopping any row
/// tasks still running) and removes the entry if it still belongs to this
/// job.
pub struct Registration {
    registry: Arc<dyn CancellationRegistry>,
    key: ClientKey,
    handle: CancellationHandle,
    superseded: Option<JobId>,
}

impl Registration {
    pub fn key(&self) -> &ClientKey {
        &self.key
    }

    pub fn job_id(&self) -> JobId {
        self.handle.job_id()
    }

    /// Token for row tasks of this job.
    pub fn token(&self) -> CancellationToken {
        self.handle.token()
    }

    pub fn is_cancelled(&self) -> bool {
        self.handle.is_cancelled()
    }

    /// Resolves once this job is superseded or shut down.
    pub async fn cancelled(&self) {
        self.handle.cancelled().await;
    }

    /// The job this admission cancelled, if there was one.
    pub fn superseded(&self) -> Option<JobId> {
        self.superseded
    }
}

impl std::fmt::Debug for Registration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registration")
            .field("key", &self.key)
            .field("job_id", &self.handle.job_id())
            .field("cancelled", &self.handle.is_cancelled())
            .finish()
    }
}

impl Drop for Registration {
    fn drop(&mut self) {
        self.handle.cancel();
        self.registry.release(&self.key, self.handle.job_id());
    }
}
