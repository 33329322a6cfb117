//! Configuration schema and loading.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → load_config (parse & deserialize)
//!     → validate_config (semantic checks)
//!     → VfsConfig (validated, immutable)
//!     → build_registry (assembles catalog + optional fetch capability)
//! ```
//!
//! # Design Decisions
//! - All fields have defaults so a minimal (or empty) config is valid
//! - Syntactic validation is serde's job; semantic checks are separate

use std::fs;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::VfsResult;
use crate::fetch::{FetchAdapter, FetchSettings};
use crate::registry::BackendRegistry;

/// Root configuration for the virtual filesystem core.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct VfsConfig {
    /// Network capability settings.
    pub network: NetworkConfig,

    /// Fixed request policy for the fetch adapter.
    pub fetch: FetchSettings,
}

/// Whether this process carries the network fetch capability.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct NetworkConfig {
    /// When false, the registry is assembled without a fetch adapter and
    /// network-backed backends report themselves unavailable.
    pub enabled: bool,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("validation failed: {0}")]
    Validation(String),
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<VfsConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: VfsConfig = toml::from_str(&content)?;

    validate_config(&config)?;

    Ok(config)
}

/// Semantic validation, run after deserialization.
pub fn validate_config(config: &VfsConfig) -> Result<(), ConfigError> {
    if config.fetch.request_timeout_secs == 0 {
        return Err(ConfigError::Validation(
            "fetch.request_timeout_secs must be greater than zero".to_string(),
        ));
    }
    Ok(())
}

/// Assemble the default backend catalog from a validated configuration.
///
/// With networking enabled the fetch adapter is built from the configured
/// request policy and injected into the backends that need it; otherwise the
/// catalog is assembled without the capability.
pub fn build_registry(config: &VfsConfig) -> VfsResult<BackendRegistry> {
    let fetch = if config.network.enabled {
        Some(Arc::new(FetchAdapter::with_settings(&config.fetch)?))
    } else {
        None
    };

    tracing::info!(
        network_enabled = config.network.enabled,
        request_timeout_secs = config.fetch.request_timeout_secs,
        "assembling backend registry"
    );

    Ok(BackendRegistry::with_defaults(fetch))
}
