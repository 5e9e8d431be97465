//! # Service Container
//!
//! Builds every component and wires them behind the gateway.
//!
//! ```text
//! InMemoryCancellationRegistry ─┐
//! auto_detect() engine ─────────┤
//! InMemoryRequestHistory ───────┼──→ JobOrchestrator ──→ ApiGatewayService
//! RandomMatrixSource ───────────┘
//! ```

use std::future::Future;
use std::sync::Arc;

use lw_01_cancellation_registry::InMemoryCancellationRegistry;
use lw_02_matrix_compute::{auto_detect, ComputeError};
use lw_03_job_orchestrator::{
    ConfigError as JobConfigError, InMemoryRequestHistory, JobOrchestrator, RandomMatrixSource,
};
use lw_04_api_gateway::{ApiGatewayService, GatewayError};
use thiserror::Error;
use tracing::info;

use crate::container::config::NodeConfig;

/// Failure while building or running the service.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid job configuration: {0}")]
    Jobs(#[from] JobConfigError),

    #[error("no compute engine: {0}")]
    Engine(#[from] ComputeError),

    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

/// Holds the wired components.
pub struct ServiceContainer {
    pub jobs: Arc<JobOrchestrator>,
    pub gateway: ApiGatewayService,
}

impl ServiceContainer {
    pub fn new(config: NodeConfig) -> Result<Self, StartupError> {
        let engine = auto_detect()?;
        let engine_info = engine.info();
        info!(
            engine = %engine_info.name,
            backend = %engine_info.backend,
            compute_units = engine_info.compute_units,
            "Compute engine selected"
        );

        let jobs = Arc::new(JobOrchestrator::new(
            config.jobs,
            Arc::new(InMemoryCancellationRegistry::new()),
            engine,
            Arc::new(InMemoryRequestHistory::new()),
            Arc::new(RandomMatrixSource),
        )?);

        let gateway = ApiGatewayService::new(config.gateway, jobs.clone())?;

        Ok(Self { jobs, gateway })
    }

    /// Serves HTTP until `shutdown` resolves.
    pub async fn run<F>(&self, shutdown: F) -> Result<(), StartupError>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.gateway.start(shutdown).await?;
        Ok(())
    }
}
