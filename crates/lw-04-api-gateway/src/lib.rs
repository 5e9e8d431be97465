// Allow missing docs for internal items in development
#![allow(missing_docs)]

//! LW-04 API Gateway - HTTP surface of the latest-wins compute service.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                   API GATEWAY (lw-04)                     │
//! ├──────────────────────────────────────────────────────────┤
//! │   /cpu-intensive   /all-values   /health   /metrics       │
//! │   /static/*        fallback → index page                  │
//! │                         │                                 │
//! │  ┌──────────────────────┴─────────────────────┐           │
//! │  │             Middleware Stack                │           │
//! │  │            Tracing → Metrics                │           │
//! │  └──────────────────────┬─────────────────────┘           │
//! └─────────────────────────┼────────────────────────────────┘
//!                           │ JobApi
//!                           ▼
//!                lw-03-job-orchestrator
//! ```
//!
//! # Client identity
//!
//! The client key is the peer IP address taken from `ConnectInfo`. Two
//! connections from the same address share one latest-wins slot.
//!
//! # Usage
//!
//! ```ignore
//! use lw_04_api_gateway::{ApiGatewayService, GatewayConfig};
//!
//! let service = ApiGatewayService::new(GatewayConfig::default(), jobs)?;
//! service.start(shutdown_signal()).await?;
//! ```

#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod domain;
pub mod middleware;
pub mod router;
pub mod service;
pub mod views;

pub use domain::{AssetsConfig, ConfigError, GatewayConfig, GatewayError, HistoryConfig, HttpConfig};
pub use middleware::GatewayMetrics;
pub use router::{build_router, AppState};
pub use service::ApiGatewayService;
