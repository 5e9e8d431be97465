//! API gateway service: owns the router and the HTTP server lifecycle.

use crate::domain::{GatewayConfig, GatewayError};
use crate::middleware::GatewayMetrics;
use crate::router::{build_router, AppState};
use axum::Router;
use lw_03_job_orchestrator::JobApi;
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

/// API Gateway service state
pub struct ApiGatewayService {
    config: GatewayConfig,
    jobs: Arc<dyn JobApi>,
    metrics: Arc<GatewayMetrics>,
}

impl ApiGatewayService {
    /// Create a new API Gateway service
    pub fn new(config: GatewayConfig, jobs: Arc<dyn JobApi>) -> Result<Self, GatewayError> {
        config
            .validate()
            .map_err(|e| GatewayError::Config(e.to_string()))?;

        Ok(Self {
            config,
            jobs,
            metrics: Arc::new(GatewayMetrics::new()),
        })
    }

    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    /// Get metrics
    pub fn metrics(&self) -> Arc<GatewayMetrics> {
        Arc::clone(&self.metrics)
    }

    /// Builds the HTTP router with all routes and middleware.
    pub fn router(&self) -> Router {
        let state = AppState::new(
            Arc::clone(&self.jobs),
            Arc::clone(&self.metrics),
            self.config.history.default_page_size,
        );
        build_router(state, &self.config.assets)
    }

    /// Binds the configured address and serves until `shutdown` resolves.
    pub async fn start<F>(&self, shutdown: F) -> Result<(), GatewayError>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = self.config.http_addr();
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|e| GatewayError::Bind(format!("{addr}: {e}")))?;
        self.serve(listener, shutdown).await
    }

    /// Serves on an already bound listener.
    ///
    /// When `shutdown` resolves every in-flight job is cancelled, so
    /// requests parked on an oversize size are answered and the server can
    /// drain.
    pub async fn serve<F>(&self, listener: TcpListener, shutdown: F) -> Result<(), GatewayError>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let local = listener
            .local_addr()
            .map_err(|e| GatewayError::Bind(e.to_string()))?;
        info!(addr = %local, "Starting HTTP server");

        let jobs = Arc::clone(&self.jobs);
        let signal = async move {
            shutdown.await;
            let cancelled = jobs.shutdown();
            info!(cancelled, "Shutdown requested, cancelled in-flight jobs");
        };

        axum::serve(
            listener,
            self.router()
                .into_make_service_with_connect_info::<SocketAddr>(),
        )
        .with_graceful_shutdown(signal)
        .await
        .map_err(|e| GatewayError::Server(e.to_string()))?;

        info!("HTTP server stopped");
        Ok(())
    }
}
