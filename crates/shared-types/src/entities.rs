//! # Core Domain Entities
//!
//! - [`ClientKey`]: who a job belongs to (request origin, port stripped)
//! - [`JobId`]: which job a cancellation handle belongs to

use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::SocketAddr;
use uuid::Uuid;

// =============================================================================
// CLIENT KEY
// =============================================================================

/// Identifies the origin of a request.
///
/// Derived from the connection address with the port stripped, so every
/// connection from the same host maps to the same key. Used only as a map
/// key; two keys are equal when their strings are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClientKey(String);

impl ClientKey {
    /// Wraps an already-derived key.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Derives a key from a raw remote address such as `10.0.0.7:51234` or
    /// `[::1]:8080`.
    ///
    /// An address that has no port (or cannot be split) is used verbatim.
    pub fn from_remote_addr(remote_addr: &str) -> Self {
        match split_host(remote_addr) {
            Some(host) => Self(host.to_string()),
            None => Self(remote_addr.to_string()),
        }
    }

    /// Derives a key from a connected peer's socket address.
    pub fn from_socket_addr(addr: SocketAddr) -> Self {
        Self(addr.ip().to_string())
    }

    /// Returns the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ClientKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<SocketAddr> for ClientKey {
    fn from(addr: SocketAddr) -> Self {
        Self::from_socket_addr(addr)
    }
}

/// Splits `host:port` / `[host]:port` and returns the host part.
///
/// Returns `None` for inputs without a port, including bare IPv6 literals
/// (more than one colon outside brackets).
fn split_host(addr: &str) -> Option<&str> {
    if let Some(rest) = addr.strip_prefix('[') {
        let (host, tail) = rest.split_once(']')?;
        return tail.strip_prefix(':').map(|_| host);
    }

    let (host, _port) = addr.rsplit_once(':')?;
    if host.contains(':') {
        return None;
    }
    Some(host)
}

// =============================================================================
// JOB ID
// =============================================================================

/// Unique identifier for one accepted job.
///
/// A cancellation handle carries the id of the job that created it so the
/// job can later remove its own registry entry without touching a newer
/// job's entry for the same key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct JobId(Uuid);

impl JobId {
    /// Generates a fresh random id.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the underlying UUID.
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for JobId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
