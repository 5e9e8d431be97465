//! Inbound (Driving) Port - Job API
//!
//! This is the API the HTTP gateway uses to run jobs and read history.

use crate::domain::{HistoryError, HistoryPage, JobOutcome, JobStatsSnapshot, RequestRecord};
use lw_01_cancellation_registry::RegistrySnapshot;
use serde::Serialize;
use shared_types::ClientKey;

/// Point-in-time view served on the health endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct JobServiceStatus {
    pub active_jobs: usize,
    pub registry: RegistrySnapshot,
    pub jobs: JobStatsSnapshot,
}

/// Primary API for the Job Orchestrator.
#[async_trait::async_trait]
pub trait JobApi: Send + Sync {
    /// Runs one job for the client behind `origin` (`host:port`, `[v6]:port`
    /// or a bare host).
    ///
    /// # Behavior
    ///
    /// - Any job still running for the same client is cancelled first.
    /// - `size_param` is the raw `size` query value.
    /// - Oversize requests resolve only when superseded or shut down.
    /// - Dropping the returned future cancels the job.
    async fn run_job(&self, origin: &str, size_param: Option<&str>) -> JobOutcome;

    /// As [`JobApi::run_job`] with an already-derived client key.
    async fn run_job_for_key(&self, key: ClientKey, size_param: Option<&str>) -> JobOutcome;

    /// One page of the client's recorded requests, ordered by id.
    fn history(
        &self,
        key: &ClientKey,
        page: HistoryPage,
    ) -> Result<Vec<RequestRecord>, HistoryError>;

    /// Current counters.
    fn status(&self) -> JobServiceStatus;

    /// Cancels every in-flight job. Returns how many were cancelled.
    fn shutdown(&self) -> usize;
}
