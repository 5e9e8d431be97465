//! # Node Configuration
//!
//! Unified configuration for the job limits and the HTTP gateway, with
//! `LW_*` environment overrides.
//!
//! Unparseable override values are logged and ignored; range checks happen
//! later in each component's `validate()`.

use lw_03_job_orchestrator::JobConfig;
use lw_04_api_gateway::GatewayConfig;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::{info, warn};

/// Complete node configuration.
#[derive(Debug, Clone, Default)]
pub struct NodeConfig {
    /// Matrix size limits and value range.
    pub jobs: JobConfig,
    /// HTTP server, assets and history page.
    pub gateway: GatewayConfig,
}

impl NodeConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration, reading overrides through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        override_parsed(&lookup, "LW_HTTP_HOST", &mut config.gateway.http.host);
        override_parsed(&lookup, "LW_HTTP_PORT", &mut config.gateway.http.port);

        override_parsed(&lookup, "LW_DEFAULT_MATRIX_SIZE", &mut config.jobs.default_size);
        override_parsed(&lookup, "LW_MAX_MATRIX_SIZE", &mut config.jobs.max_size);
        override_parsed(&lookup, "LW_VALUE_UPPER_BOUND", &mut config.jobs.value_upper_bound);

        if let Some(dir) = lookup("LW_STATIC_DIR") {
            config.gateway.assets.static_dir = PathBuf::from(dir);
        }
        if let Some(file) = lookup("LW_INDEX_FILE") {
            config.gateway.assets.index_file = PathBuf::from(file);
        }

        override_parsed(
            &lookup,
            "LW_HISTORY_PAGE_SIZE",
            &mut config.gateway.history.default_page_size,
        );

        config
    }
}

fn override_parsed<F, T>(lookup: &F, key: &str, target: &mut T)
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    let Some(raw) = lookup(key) else {
        return;
    };
    match raw.trim().parse() {
        Ok(value) => {
            *target = value;
            info!(key, value = %raw, "Loaded configuration override");
        }
        Err(_) => warn!(key, value = %raw, "Ignoring unparseable configuration override"),
    }
}
