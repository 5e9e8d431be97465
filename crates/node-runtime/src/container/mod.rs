//! # Service Container
//!
//! Configuration loading and dependency injection for the runtime.

pub mod config;
pub mod services;

pub use config::NodeConfig;
pub use services::{ServiceContainer, StartupError};
