//! Job orchestrator service.
//!
//! Drives one job through admission, sizing, the oversize gate, computation
//! and reporting. Cleanup is the drop of the job's [`Registration`].

use crate::domain::{
    ConfigError, HistoryError, HistoryPage, JobConfig, JobOutcome, JobReport, JobStats,
    RequestRecord, SizeDecision, SizePolicy,
};
use crate::ports::{JobApi, JobServiceStatus, MatrixSource, RequestHistory};
use lw_01_cancellation_registry::{admit, CancellationRegistry, Registration};
use lw_02_matrix_compute::MatrixEngine;
use lw_telemetry::{
    time_histogram, JOBS_ACCEPTED, JOBS_ACTIVE, JOBS_CANCELLED, JOBS_COMPLETED, JOBS_FAILED,
    JOBS_SUPERSEDED, JOB_DURATION,
};
use shared_types::ClientKey;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, error, field, info, info_span, warn, Instrument};

/// Decrements the in-flight gauge however the job ends.
struct ActiveJob;

impl ActiveJob {
    fn enter() -> Self {
        JOBS_ACTIVE.inc();
        ActiveJob
    }
}

impl Drop for ActiveJob {
    fn drop(&mut self) {
        JOBS_ACTIVE.dec();
    }
}

/// Runs latest-wins matrix jobs.
pub struct JobOrchestrator {
    config: JobConfig,
    policy: SizePolicy,
    registry: Arc<dyn CancellationRegistry>,
    engine: Arc<dyn MatrixEngine>,
    history: Arc<dyn RequestHistory>,
    source: Arc<dyn MatrixSource>,
    stats: JobStats,
}

impl JobOrchestrator {
    /// Create a new orchestrator.
    ///
    /// # Errors
    /// Returns an error if the configuration is invalid.
    pub fn new(
        config: JobConfig,
        registry: Arc<dyn CancellationRegistry>,
        engine: Arc<dyn MatrixEngine>,
        history: Arc<dyn RequestHistory>,
        source: Arc<dyn MatrixSource>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        Ok(Self {
            policy: SizePolicy::from_config(&config),
            config,
            registry,
            engine,
            history,
            source,
            stats: JobStats::default(),
        })
    }

    pub fn config(&self) -> &JobConfig {
        &self.config
    }

    pub fn registry(&self) -> &Arc<dyn CancellationRegistry> {
        &self.registry
    }

    async fn execute(&self, registration: &Registration, size_param: Option<&str>) -> JobOutcome {
        match self.policy.resolve(size_param) {
            SizeDecision::Oversize(requested) => {
                tracing::Span::current().record("size", requested);
                info!(
                    requested,
                    max = self.config.max_size,
                    "Oversize request waiting for cancellation"
                );
                registration.cancelled().await;
                JobOutcome::RejectedOversize
            }
            SizeDecision::Compute(size) => {
                tracing::Span::current().record("size", size);
                self.compute(registration, size).await
            }
        }
    }

    async fn compute(&self, registration: &Registration, size: usize) -> JobOutcome {
        if let Err(e) = self.history.record(registration.key(), size) {
            warn!(error = %e, "Failed to record request, continuing");
        }

        let _timer = time_histogram!(JOB_DURATION);
        let start = Instant::now();

        let source = Arc::clone(&self.source);
        let upper = self.config.value_upper_bound;
        let generated = tokio::task::spawn_blocking(move || {
            let a = source.generate(size, upper);
            let b = source.generate(size, upper);
            (a, b)
        })
        .await;
        let (a, b) = match generated {
            Ok(pair) => pair,
            Err(e) => return JobOutcome::Failed(format!("matrix generation failed: {e}")),
        };

        let product = match self
            .engine
            .multiply(Arc::new(a), Arc::new(b), registration.token())
            .await
        {
            Ok(product) => product,
            Err(e) => return JobOutcome::Failed(e.to_string()),
        };
        let elapsed_ms = start.elapsed().as_millis() as u64;

        if product.cancelled || registration.is_cancelled() {
            debug!(
                rows_completed = product.rows_completed,
                "Discarding partial product"
            );
            return JobOutcome::Cancelled;
        }

        JobOutcome::Completed(JobReport {
            size,
            elapsed_ms,
            matrix: product.matrix,
        })
    }

    fn record_outcome(&self, outcome: &JobOutcome) {
        self.stats.record_outcome(outcome);
        match outcome {
            JobOutcome::Completed(report) => {
                JOBS_COMPLETED.inc();
                info!(elapsed_ms = report.elapsed_ms, "Job completed");
            }
            JobOutcome::Cancelled => {
                JOBS_CANCELLED.with_label_values(&["compute"]).inc();
                info!("Job cancelled");
            }
            JobOutcome::RejectedOversize => {
                JOBS_CANCELLED.with_label_values(&["oversize"]).inc();
                info!("Oversize job cancelled");
            }
            JobOutcome::Failed(reason) => {
                JOBS_FAILED.inc();
                error!(reason = %reason, "Job failed");
            }
        }
    }
}

#[async_trait::async_trait]
impl JobApi for JobOrchestrator {
    async fn run_job(&self, origin: &str, size_param: Option<&str>) -> JobOutcome {
        self.run_job_for_key(ClientKey::from_remote_addr(origin), size_param)
            .await
    }

    async fn run_job_for_key(&self, key: ClientKey, size_param: Option<&str>) -> JobOutcome {
        let registration = admit(&self.registry, key);
        let _active = ActiveJob::enter();
        JOBS_ACCEPTED.inc();
        self.stats.accepted.fetch_add(1, Ordering::Relaxed);

        let span = info_span!(
            "job",
            client = %registration.key(),
            job_id = %registration.job_id(),
            size = field::Empty,
        );

        async {
            if let Some(previous) = registration.superseded() {
                JOBS_SUPERSEDED.inc();
                self.stats.superseded.fetch_add(1, Ordering::Relaxed);
                debug!(superseded_job = %previous, "Superseded previous job");
            }

            let outcome = self.execute(&registration, size_param).await;
            self.record_outcome(&outcome);
            outcome
        }
        .instrument(span)
        .await
    }

    fn history(
        &self,
        key: &ClientKey,
        page: HistoryPage,
    ) -> Result<Vec<RequestRecord>, HistoryError> {
        let records = self.history.for_client(key)?;
        Ok(page.apply(records))
    }

    fn status(&self) -> JobServiceStatus {
        let registry = self.registry.stats();
        JobServiceStatus {
            active_jobs: registry.active,
            registry,
            jobs: self.stats.snapshot(),
        }
    }

    fn shutdown(&self) -> usize {
        self.registry.cancel_all()
    }
}
