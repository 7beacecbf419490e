//! Runtime configuration for the headline pipeline.
//!
//! Values are layered: built-in defaults, then an optional YAML file, then
//! command-line flags (see [`crate::cli`]). Everything the pipeline needs is
//! handed to its constructors from here; nothing is read from globals.
//!
//! # Example
//!
//! ```yaml
//! api_key: my-key
//! query_mode: section
//! page_size: 20
//! read_timeout_secs: 10
//! ```

use crate::models::QueryMode;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;
use tokio::fs;
use tracing::{info, instrument};
use url::Url;

pub const DEFAULT_BASE_URL: &str = "https://content.guardianapis.com/search";
/// The API's shared developer key.
pub const DEFAULT_API_KEY: &str = "test";

/// Errors raised while loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("invalid base_url {url:?}: {reason}")]
    BaseUrl { url: String, reason: String },

    #[error("invalid value for {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}

/// Pipeline settings. Missing keys in the YAML file keep their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Search endpoint of the content API.
    pub base_url: String,
    pub api_key: String,
    /// Results per request; the API's fixed page size.
    pub page_size: u32,
    pub order_by: String,
    pub query_mode: QueryMode,
    pub connect_timeout_secs: u64,
    pub read_timeout_secs: u64,
    /// Upper bound on the connectivity probe's DNS lookup.
    pub probe_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: DEFAULT_API_KEY.to_string(),
            page_size: 20,
            order_by: "newest".to_string(),
            query_mode: QueryMode::Tag,
            connect_timeout_secs: 15,
            read_timeout_secs: 10,
            probe_timeout_secs: 5,
        }
    }
}

impl Config {
    /// Load configuration from an optional YAML file.
    ///
    /// Without a path the defaults are returned. The result is not
    /// validated: command-line overrides still apply on top of it, so call
    /// [`Config::validate`] once all layers are merged.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid YAML.
    #[instrument(level = "info")]
    pub async fn load(path: Option<&str>) -> Result<Self, ConfigError> {
        let config = match path {
            Some(path) => {
                let raw = fs::read_to_string(path).await.map_err(|source| ConfigError::Read {
                    path: path.to_string(),
                    source,
                })?;
                let config = Self::from_yaml(&raw).map_err(|source| ConfigError::Parse {
                    path: path.to_string(),
                    source,
                })?;
                info!(path, "Loaded configuration file");
                config
            }
            None => Self::default(),
        };
        Ok(config)
    }

    fn from_yaml(raw: &str) -> Result<Self, serde_yaml::Error> {
        // An empty file deserializes to a unit value, not a map.
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(raw)
    }

    /// Check the values the pipeline relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.parsed_base_url()?;
        if self.api_key.trim().is_empty() {
            return Err(ConfigError::Invalid {
                key: "api_key",
                reason: "must not be empty".to_string(),
            });
        }
        if self.page_size == 0 {
            return Err(ConfigError::Invalid {
                key: "page_size",
                reason: "must be positive".to_string(),
            });
        }
        if self.order_by.trim().is_empty() {
            return Err(ConfigError::Invalid {
                key: "order_by",
                reason: "must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// The base URL as an absolute http(s) URL with a host.
    pub fn parsed_base_url(&self) -> Result<Url, ConfigError> {
        let bad = |reason: String| ConfigError::BaseUrl {
            url: self.base_url.clone(),
            reason,
        };
        let url = Url::parse(&self.base_url).map_err(|e| bad(e.to_string()))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(bad(format!("unsupported scheme {}", url.scheme())));
        }
        if url.host_str().is_none() {
            return Err(bad("missing host".to_string()));
        }
        Ok(url)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn read_timeout(&self) -> Duration {
        Duration::from_secs(self.read_timeout_secs)
    }

    pub fn probe_timeout(&self) -> Duration {
        Duration::from_secs(self.probe_timeout_secs)
    }
}
