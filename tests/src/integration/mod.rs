//! Cross-crate integration tests and their shared fixtures.

mod flows;
mod http;

use std::sync::Arc;
use std::time::Duration;

use lw_01_cancellation_registry::InMemoryCancellationRegistry;
use lw_02_matrix_compute::backends::cpu::CpuEngine;
use lw_03_job_orchestrator::{
    InMemoryRequestHistory, JobApi, JobConfig, JobOrchestrator, SeededMatrixSource,
};

/// Orchestrator wired with the production CPU engine and in-memory history.
pub fn orchestrator() -> Arc<JobOrchestrator> {
    orchestrator_with(JobConfig::default())
}

pub fn orchestrator_with(config: JobConfig) -> Arc<JobOrchestrator> {
    let jobs = JobOrchestrator::new(
        config,
        Arc::new(InMemoryCancellationRegistry::new()),
        Arc::new(CpuEngine::new()),
        Arc::new(InMemoryRequestHistory::new()),
        Arc::new(SeededMatrixSource::new(42)),
    );
    match jobs {
        Ok(jobs) => Arc::new(jobs),
        Err(e) => panic!("fixture config rejected: {e}"),
    }
}

/// Polls until `jobs` reports `count` registered jobs, or panics after 10s.
pub async fn wait_for_active(jobs: &dyn JobApi, count: usize) {
    let reached = tokio::time::timeout(Duration::from_secs(10), async {
        while jobs.status().active_jobs != count {
            tokio::time::sleep(Duration::from_millis(2)).await;
        }
    })
    .await;
    assert!(reached.is_ok(), "never reached {count} active jobs");
}
