//! Ports layer for the Cancellation Registry.
//!
//! Only an inbound (driving) port exists; the registry has no outbound
//! dependencies.

pub mod inbound;

pub use inbound::*;
