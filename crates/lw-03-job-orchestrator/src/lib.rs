//! # Job Orchestrator
//!
//! **Component:** 3
//! **Status:** Production-Ready
//!
//! ## Purpose
//!
//! Runs one matrix job per request under the latest-wins rule: a client's
//! new request cancels its previous one before starting.
//!
//! ## Job State Machine
//!
//! ```text
//! [ACCEPTED] ──admit──→ [REGISTERED] ──resolve size──┬──→ [COMPUTING] ──→ Completed | Cancelled
//!                                                    │
//!                                                    └──→ [AWAITING CANCELLATION] ──→ RejectedOversize
//!
//! any state ──Registration dropped──→ own handle cancelled, entry released
//! ```
//!
//! | Stage | Where | Effect |
//! |-------|-------|--------|
//! | Admit | `lw_01_cancellation_registry::admit` | Previous job cancelled, new handle registered |
//! | Size | `domain/sizing.rs` | Malformed or non-positive → default; above max → oversize |
//! | Compute | `service.rs` | History recorded, matrices generated, engine invoked |
//! | Report | `service.rs` | Signal re-checked; cancelled products are discarded |
//!
//! ## Outbound Dependencies
//!
//! | Port | Adapter | Purpose |
//! |------|---------|---------|
//! | `RequestHistory` | `InMemoryRequestHistory` | Records computed requests |
//! | `MatrixSource` | `RandomMatrixSource`, `SeededMatrixSource` | Input generation |
//! | `MatrixEngine` | `lw_02_matrix_compute::CpuEngine` | Row-parallel multiply |

#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

pub use adapters::{InMemoryRequestHistory, RandomMatrixSource, SeededMatrixSource};
pub use domain::{
    ConfigError, HistoryError, HistoryPage, JobConfig, JobOutcome, JobReport, JobStatsSnapshot,
    RequestRecord, SizeDecision, SizePolicy,
};
pub use ports::{JobApi, JobServiceStatus, MatrixSource, RequestHistory};
pub use service::JobOrchestrator;
