//! # Cancellation Registry
//!
//! **Component:** 1 (leaf)
//! **Status:** Production-Ready
//!
//! ## Purpose
//!
//! Tracks, per client key, the cancellation handle of the job currently
//! running for that client, so a newer request can supersede (cancel) the
//! older one.
//!
//! ## Domain Invariants
//!
//! | Invariant | Enforcement Location |
//! |-----------|---------------------|
//! | At most one live handle per key | `service.rs` - `register()` cancels any displaced handle |
//! | Supersede happens-before register | `registration.rs` - `admit()` ordering |
//! | A job only removes its own entry | `service.rs` - `release()` compares `JobId` |
//! | Lock never held across computation | `service.rs` - every critical section is a map operation |
//!
//! ## Lifecycle
//!
//! ```text
//! admit(key) ──supersede──→ [previous handle cancelled + removed]
//!     │
//!     └──register──→ [ACTIVE] ──newer admit(key)──→ [CANCELLED, removed]
//!                        │
//!                        └──Registration dropped──→ [CANCELLED, released]
//! ```
//!
//! ## Module Structure (Hexagonal Architecture)
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  service.rs      - InMemoryCancellationRegistry (Mutex<HashMap>)│
//! │  registration.rs - admit() + RAII Registration guard            │
//! └─────────────────────────────────────────────────────────────────┘
//!                          ↑ implements ↑
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  ports/inbound.rs - CancellationRegistry trait                  │
//! └─────────────────────────────────────────────────────────────────┘
//!                          ↑ uses ↑
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  domain/handle.rs - CancellationHandle (JobId + token)          │
//! │  domain/stats.rs  - RegistryStats, RegistrySnapshot             │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod domain;
pub mod ports;
pub mod registration;
pub mod service;

pub use domain::{CancellationHandle, RegistrySnapshot, RegistryStats};
pub use ports::CancellationRegistry;
pub use registration::{admit, Registration};
pub use service::InMemoryCancellationRegistry;
