//! Client configuration management
//!
//! Credential resolution plus an optional TOML configuration file. The API key
//! is resolved once, at client construction, so a missing key fails fast
//! before any request is attempted.

use crate::core::constants::{env, service};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Errors raised while building a client
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{service} API key not found: pass it explicitly or set {env_var}")]
    MissingApiKey {
        service: &'static str,
        env_var: &'static str,
    },

    #[error("Invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("Failed to create HTTP client: {0}")]
    HttpClient(String),
}

/// Resolve the API key from an explicit value or the environment
///
/// The explicit value wins when present and non-empty. Otherwise `lookup` is
/// asked for `env_var`. Empty strings count as absent in both places.
pub fn resolve_api_key<F>(
    explicit: Option<String>,
    env_var: &'static str,
    lookup: F,
) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    explicit
        .filter(|key| !key.is_empty())
        .or_else(|| lookup(env_var).filter(|key| !key.is_empty()))
        .ok_or(ConfigError::MissingApiKey {
            service: service::NAME,
            env_var,
        })
}

fn default_base_url() -> String {
    service::DEFAULT_BASE_URL.to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

/// Client configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// API key from the config file; the environment is consulted when absent
    pub api_key: Option<String>,

    /// Service host, without a trailing slash
    pub base_url: String,

    /// Logging level for the command-line front end
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read or parsed
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path).context("Failed to read configuration file")?;

        let config: TomlConfig =
            toml::from_str(&content).context("Failed to parse TOML configuration")?;

        Ok(Config {
            api_key: config.api_key,
            base_url: config.base_url,
            log_level: config.log_level,
        })
    }

    /// Load configuration from the process environment
    ///
    /// Reads `VALIDATOR_CONFIG_PATH` when set, then applies the
    /// `VALIDATOR_BASE_URL` and `LOG_LEVEL` overrides. The API key is not read
    /// here; see [`Config::resolve_api_key`].
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as [`Config::from_env`] over an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match lookup(env::CONFIG_PATH) {
            Some(path) => Self::from_file(&path)
                .with_context(|| format!("Failed to load configuration from {}", path))?,
            None => Self::default(),
        };

        if let Some(base_url) = lookup(env::BASE_URL).filter(|url| !url.is_empty()) {
            config.base_url = base_url;
        }
        if let Some(log_level) = lookup(env::LOG_LEVEL).filter(|level| !level.is_empty()) {
            config.log_level = log_level;
        }

        Ok(config)
    }

    /// Resolve the API key, falling back to `VALIDATOR_API_KEY`
    pub fn resolve_api_key(&self) -> Result<String, ConfigError> {
        resolve_api_key(self.api_key.clone(), env::API_KEY, |name| {
            std::env::var(name).ok()
        })
    }
}
