//! HTTP routes.
//!
//! | Route | Handler |
//! |-------|---------|
//! | `GET /cpu-intensive?size=N` | one latest-wins job for the caller |
//! | `GET /all-values?page=P&pageSize=S` | caller's request history as HTML |
//! | `GET /health` | JSON status |
//! | `GET /metrics` | Prometheus text exposition |
//! | `/static/*` | files under the static dir |
//! | anything else | the index page |

use crate::domain::AssetsConfig;
use crate::middleware::{GatewayMetrics, MetricsLayer, TracingLayer};
use crate::views;
use axum::{
    extract::{ConnectInfo, Query, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::get,
    Json, Router,
};
use lw_03_job_orchestrator::{HistoryPage, JobApi, JobOutcome};
use lw_telemetry::encode_metrics;
use shared_types::ClientKey;
use std::net::SocketAddr;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::services::{ServeDir, ServeFile};
use tracing::{error, warn};

const TEXT_PLAIN: &str = "text/plain; charset=utf-8";
const PROMETHEUS_TEXT: &str = "text/plain; version=0.0.4";

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub jobs: Arc<dyn JobApi>,
    pub metrics: Arc<GatewayMetrics>,
    pub default_page_size: usize,
}

impl AppState {
    pub fn new(jobs: Arc<dyn JobApi>, metrics: Arc<GatewayMetrics>, default_page_size: usize) -> Self {
        Self {
            jobs,
            metrics,
            default_page_size,
        }
    }
}

/// Builds the full router with its middleware stack.
///
/// Handlers read the peer address through `ConnectInfo`, so serve the
/// router with `into_make_service_with_connect_info::<SocketAddr>()`.
pub fn build_router(state: AppState, assets: &AssetsConfig) -> Router {
    let middleware = ServiceBuilder::new()
        .layer(TracingLayer::new())
        .layer(MetricsLayer::new(Arc::clone(&state.metrics)));

    Router::new()
        .route("/cpu-intensive", get(cpu_intensive))
        .route("/all-values", get(all_values))
        .route("/health", get(health_check))
        .route("/metrics", get(prometheus_metrics))
        .nest_service("/static", ServeDir::new(&assets.static_dir))
        .fallback_service(ServeFile::new(&assets.index_file))
        .layer(middleware)
        .with_state(state)
}

/// Decoded query pairs in request order. Repeated keys are kept.
type QueryPairs = Option<Query<Vec<(String, String)>>>;

/// First value for `name`, as `?a=1&a=2` yields `1`.
fn first_param<'a>(pairs: &'a QueryPairs, name: &str) -> Option<&'a str> {
    pairs
        .as_ref()?
        .iter()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.as_str())
}

/// Runs one job for the caller. Unparseable query strings count as a
/// missing size.
async fn cpu_intensive(
    State(state): State<AppState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    params: QueryPairs,
) -> Response {
    let size = first_param(&params, "size");
    let outcome = state
        .jobs
        .run_job_for_key(ClientKey::from_socket_addr(addr), size)
        .await;

    let status = match outcome {
        JobOutcome::Failed(_) => StatusCode::INTERNAL_SERVER_ERROR,
        _ => StatusCode::OK,
    };
    (status, [(header::CONTENT_TYPE, TEXT_PLAIN)], outcome.to_string()).into_response()
}

async fn all_values(
    State(state): State<AppState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    params: QueryPairs,
) -> Response {
    let page = HistoryPage::from_params(
        first_param(&params, "page"),
        first_param(&params, "pageSize"),
        state.default_page_size,
    );
    let key = ClientKey::from_socket_addr(addr);

    match state.jobs.history(&key, page) {
        Ok(records) => Html(views::history_table(&records)).into_response(),
        Err(e) => {
            warn!(client = %key, error = %e, "Failed to fetch request history");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                [(header::CONTENT_TYPE, TEXT_PLAIN)],
                "Unable to fetch data\n",
            )
                .into_response()
        }
    }
}

/// Health check endpoint
async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let status = state.jobs.status();
    Json(serde_json::json!({
        "status": "healthy",
        "active_jobs": status.active_jobs,
        "registry": status.registry,
        "jobs": status.jobs,
        "gateway": state.metrics.to_json(),
    }))
}

async fn prometheus_metrics() -> Response {
    match encode_metrics() {
        Ok(body) => ([(header::CONTENT_TYPE, PROMETHEUS_TEXT)], body).into_response(),
        Err(e) => {
            error!(error = %e, "Failed to encode metrics");
            (StatusCode::INTERNAL_SERVER_ERROR, "Unable to encode metrics\n").into_response()
        }
    }
}
