//! Middleware stack for the gateway.
//!
//! Layer order: Request → Tracing → Metrics → Handler

pub mod metrics;
pub mod tracing;

pub use self::metrics::{GatewayMetrics, MetricsLayer, RequestTimer};
pub use self::tracing::TracingLayer;
