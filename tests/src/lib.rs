//! # Latest-Wins Test Suite
//!
//! ## Structure
//!
//! ```text
//! tests/
//! ├── benches/          # Criterion benchmarks for the multiply engine
//! └── src/integration/  # Cross-crate flows
//!     ├── flows.rs      # Orchestrator + registry + engine, no HTTP
//!     └── http.rs       # Full stack over a real TCP socket
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p lw-tests
//!
//! # Benchmarks
//! cargo bench -p lw-tests
//! ```

#![allow(dead_code)]

pub mod integration;
