//! Prometheus metrics for the latest-wins service.
//!
//! All metrics follow the naming convention: `lw_<subject>_<metric>_<unit>`
//!
//! ## Metric Types
//!
//! - **Counter**: Monotonically increasing value (e.g., jobs_completed_total)
//! - **Gauge**: Value that can go up or down (e.g., jobs_active)
//! - **Histogram**: Distribution of values (e.g., job_duration_seconds)

use lazy_static::lazy_static;
use prometheus::{
    exponential_buckets, Counter, CounterVec, Encoder, Gauge, Histogram, Opts, Registry,
    TextEncoder,
};
use std::sync::Arc;

use crate::TelemetryError;

lazy_static! {
    /// Global metrics registry
    pub static ref REGISTRY: Registry = Registry::new();

    /// Jobs admitted into the registry
    pub static ref JOBS_ACCEPTED: Counter = Counter::new(
        "lw_jobs_accepted_total",
        "Total number of jobs admitted"
    ).expect("metric creation failed");

    /// Jobs that produced a product
    pub static ref JOBS_COMPLETED: Counter = Counter::new(
        "lw_jobs_completed_total",
        "Total number of jobs that completed their multiplication"
    ).expect("metric creation failed");

    /// Jobs that ended cancelled
    pub static ref JOBS_CANCELLED: CounterVec = CounterVec::new(
        Opts::new("lw_jobs_cancelled_total", "Total number of cancelled jobs"),
        &["reason"]  // reason: compute/oversize
    ).expect("metric creation failed");

    /// Jobs whose compute task failed
    pub static ref JOBS_FAILED: Counter = Counter::new(
        "lw_jobs_failed_total",
        "Total number of jobs whose compute task failed"
    ).expect("metric creation failed");

    /// Previous jobs cancelled by a newer request from the same client
    pub static ref JOBS_SUPERSEDED: Counter = Counter::new(
        "lw_jobs_superseded_total",
        "Total number of jobs superseded by a newer request"
    ).expect("metric creation failed");

    /// Jobs currently between admission and cleanup
    pub static ref JOBS_ACTIVE: Gauge = Gauge::new(
        "lw_jobs_active",
        "Number of jobs currently in flight"
    ).expect("metric creation failed");

    /// Wall time of the compute phase, generation included
    pub static ref JOB_DURATION: Histogram = Histogram::with_opts(
        prometheus::HistogramOpts::new(
            "lw_job_duration_seconds",
            "Time spent generating and multiplying matrices"
        ).buckets(exponential_buckets(0.001, 2.0, 16).expect("bucket creation failed"))
    ).expect("metric creation failed");
}

/// Handle to the registry the metrics were registered into
pub struct MetricsHandle {
    _registry: Arc<Registry>,
}

/// Register all metrics with the global registry.
///
/// Metrics already registered are skipped, so calling this twice is safe.
pub fn register_metrics() -> Result<MetricsHandle, TelemetryError> {
    let metrics: Vec<Box<dyn prometheus::core::Collector>> = vec![
        Box::new(JOBS_ACCEPTED.clone()),
        Box::new(JOBS_COMPLETED.clone()),
        Box::new(JOBS_CANCELLED.clone()),
        Box::new(JOBS_FAILED.clone()),
        Box::new(JOBS_SUPERSEDED.clone()),
        Box::new(JOBS_ACTIVE.clone()),
        Box::new(JOB_DURATION.clone()),
    ];

    for metric in metrics {
        match REGISTRY.register(metric) {
            Ok(()) | Err(prometheus::Error::AlreadyReg) => {}
            Err(e) => return Err(TelemetryError::MetricsInit(e.to_string())),
        }
    }

    Ok(MetricsHandle {
        _registry: Arc::new(REGISTRY.clone()),
    })
}

/// Encode all metrics as Prometheus text format.
pub fn encode_metrics() -> Result<String, TelemetryError> {
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();
    let mut buffer = Vec::new();
    encoder
        .encode(&metric_families, &mut buffer)
        .map_err(|e| TelemetryError::MetricsInit(e.to_string()))?;
    String::from_utf8(buffer).map_err(|e| TelemetryError::MetricsInit(e.to_string()))
}

/// Timer guard for automatic histogram observation.
pub struct HistogramTimer {
    histogram: Histogram,
    start: std::time::Instant,
}

impl HistogramTimer {
    /// Start a new timer for the given histogram.
    pub fn new(histogram: &Histogram) -> Self {
        Self {
            histogram: histogram.clone(),
            start: std::time::Instant::now(),
        }
    }
}

impl Drop for HistogramTimer {
    fn drop(&mut self) {
        let duration = self.start.elapsed().as_secs_f64();
        self.histogram.observe(duration);
    }
}

/// Start timing for a histogram. Observation happens on drop.
#[macro_export]
macro_rules! time_histogram {
    ($histogram:expr) => {
        $crate::metrics::HistogramTimer::new(&$histogram)
    };
}
