//! Ports layer for the Job Orchestrator.
//!
//! - `inbound`: the API the HTTP gateway drives
//! - `outbound`: history persistence and matrix generation

pub mod inbound;
pub mod outbound;

pub use inbound::*;
pub use outbound::*;
