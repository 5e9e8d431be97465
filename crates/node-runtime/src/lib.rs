//! # Latest-Wins Node Runtime
//!
//! Library half of the `latest-wins` binary.
//!
//! ## Startup Sequence
//!
//! 1. Install telemetry (`lw_telemetry::init_telemetry`)
//! 2. Load configuration from `LW_*` variables
//! 3. Build the container (registry, engine, history, orchestrator, gateway)
//! 4. Serve HTTP until Ctrl+C
//! 5. Cancel every in-flight job and drain connections

pub mod container;

pub use container::{NodeConfig, ServiceContainer, StartupError};
