// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Writer configuration
//!
//! Loaded from TOML:
//!
//! ```toml
//! region = "eu-west-1"
//! log_group = "/app/backend"
//! max_retries = 3
//! request_timeout = "10s"
//! # endpoint = "http://localhost:4566"
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Default corrective-retry budget per event
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// Default timeout for a single remote call
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Log group names are limited by the service
const MAX_LOG_GROUP_LEN: usize = 512;

/// Errors from loading or validating configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("missing {0}")]
    Missing(&'static str),
    #[error("invalid {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Target and retry settings for a writer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WriterConfig {
    /// Service region; picks the default endpoint
    pub region: String,
    /// Log group every stream lives in
    pub log_group: String,
    /// Corrective retries shared by all corrective causes
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
    /// Overrides the regional endpoint (emulators, proxies)
    #[serde(default)]
    pub endpoint: Option<String>,
    #[serde(default = "default_request_timeout", with = "humantime_serde")]
    pub request_timeout: Duration,
}

fn default_max_retries() -> u32 {
    DEFAULT_MAX_RETRIES
}

fn default_request_timeout() -> Duration {
    DEFAULT_REQUEST_TIMEOUT
}

impl WriterConfig {
    pub fn new(region: impl Into<String>, log_group: impl Into<String>) -> Self {
        Self {
            region: region.into(),
            log_group: log_group.into(),
            max_retries: DEFAULT_MAX_RETRIES,
            endpoint: None,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }

    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Parse and validate a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: WriterConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.region.trim().is_empty() {
            return Err(ConfigError::Missing("region"));
        }
        if self.log_group.trim().is_empty() {
            return Err(ConfigError::Missing("log_group"));
        }
        if self.log_group.len() > MAX_LOG_GROUP_LEN {
            return Err(ConfigError::Invalid {
                field: "log_group",
                reason: format!("longer than {} characters", MAX_LOG_GROUP_LEN),
            });
        }
        if self.max_retries == 0 {
            return Err(ConfigError::Invalid {
                field: "max_retries",
                reason: "must be at least 1".to_string(),
            });
        }
        if let Some(endpoint) = &self.endpoint {
            if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
                return Err(ConfigError::Invalid {
                    field: "endpoint",
                    reason: format!("expected an http(s) URL, got '{}'", endpoint),
                });
            }
        }
        Ok(())
    }

    /// Endpoint URL: the override, or the regional default
    pub fn endpoint_url(&self) -> String {
        match &self.endpoint {
            Some(endpoint) => endpoint.trim_end_matches('/').to_string(),
            None => format!("https://logs.{}.amazonaws.com", self.region),
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
