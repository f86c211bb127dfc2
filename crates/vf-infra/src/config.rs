//! Application store configuration.
//!
//! Loaded from an optional TOML file with `VISAFLOW_`-prefixed environment
//! variables layered on top. Missing keys fall back to the serde defaults.

use std::path::Path;
use std::time::Duration;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Connection settings for the remote application store.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Base URL of the backend, without the `/api` prefix
    pub base_url: String,

    /// Client-side request timeout in seconds
    pub timeout_secs: u64,

    /// User-Agent header sent with every request
    pub user_agent: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            timeout_secs: 30,
            user_agent: format!("visaflow/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl StoreConfig {
    /// Load settings from the given file (if any) and the environment.
    ///
    /// `VISAFLOW_BASE_URL` and friends override file values.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(File::from(path));
        }
        builder
            .add_source(Environment::with_prefix("VISAFLOW").try_parsing(true))
            .build()?
            .try_deserialize()
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
