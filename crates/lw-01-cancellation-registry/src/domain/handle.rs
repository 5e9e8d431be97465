//! Cancellation handle owned by one job.

use shared_types::JobId;
use tokio_util::sync::CancellationToken;

/// Opaque cancellation handle for one accepted job.
///
/// Cloning is cheap; every clone observes the same token. Triggering is
/// idempotent and cannot be undone.
#[derive(Debug, Clone)]
pub struct CancellationHandle {
    job_id: JobId,
    token: CancellationToken,
}

impl CancellationHandle {
    /// Creates an untriggered handle for a fresh job.
    pub fn new() -> Self {
        Self::for_job(JobId::new())
    }

    /// Creates an untriggered handle for `job_id`.
    pub fn for_job(job_id: JobId) -> Self {
        Self {
            job_id,
            token: CancellationToken::new(),
        }
    }

    /// The job this handle belongs to.
    pub fn job_id(&self) -> JobId {
        self.job_id
    }

    /// A token clone to hand to row tasks.
    pub fn token(&self) -> CancellationToken {
        self.token.clone()
    }

    /// Triggers the handle, notifying every observer.
    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Resolves once the handle has been triggered.
    pub async fn cancelled(&self) {
        self.token.cancelled().await;
    }
}

impl Default for CancellationHandle {
    fn default() -> Self {
        Self::new()
    }
}
