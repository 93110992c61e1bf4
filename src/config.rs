//! Configuration management for the Gandi registrar adapter.
//!
//! This module handles loading and validating configuration from environment
//! variables. Every setting has a default, so a host platform that only
//! supplies the API key per call can run on `Config::default()` unchanged.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Default Gandi domain API base.
pub const DEFAULT_API_BASE_URL: &str = "https://api.gandi.net/v5";

/// Default Gandi LiveDNS API base.
pub const DEFAULT_LIVEDNS_BASE_URL: &str = "https://api.gandi.net/v5/livedns";

/// Configuration for the Gandi registrar adapter.
#[derive(Debug, Clone)]
pub struct Config {
    /// Domain API base URL
    pub api_base_url: String,

    /// LiveDNS API base URL
    pub livedns_base_url: String,

    /// HTTP request timeout in seconds (default: 30)
    pub request_timeout: u64,

    /// Owner language used when the host platform supplies none
    pub default_language: Option<String>,

    /// Seconds to wait after a successful contact update before returning,
    /// covering registrar-side propagation (default: 5)
    pub contact_update_delay: u64,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `GANDI_API_BASE_URL`: Domain API base (default: production endpoint)
    /// - `GANDI_LIVEDNS_BASE_URL`: LiveDNS API base (default: production endpoint)
    /// - `GANDI_REQUEST_TIMEOUT`: HTTP timeout in seconds (default: 30)
    /// - `GANDI_DEFAULT_LANGUAGE`: Fallback owner language (default: unset)
    /// - `GANDI_CONTACT_UPDATE_DELAY`: Post-update delay in seconds (default: 5)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let api_base_url =
            env::var("GANDI_API_BASE_URL").unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string());
        let livedns_base_url = env::var("GANDI_LIVEDNS_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_LIVEDNS_BASE_URL.to_string());

        Self::validate_url("GANDI_API_BASE_URL", &api_base_url)?;
        Self::validate_url("GANDI_LIVEDNS_BASE_URL", &livedns_base_url)?;

        let request_timeout = Self::parse_env_u64("GANDI_REQUEST_TIMEOUT", 30)?;
        let contact_update_delay = Self::parse_env_u64("GANDI_CONTACT_UPDATE_DELAY", 5)?;

        let default_language = env::var("GANDI_DEFAULT_LANGUAGE")
            .ok()
            .filter(|v| !v.trim().is_empty());

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            api_base_url,
            livedns_base_url,
            request_timeout,
            default_language,
            contact_update_delay,
            log_level,
        })
    }

    /// Validate that a base URL looks like an HTTP(S) endpoint.
    fn validate_url(var_name: &str, value: &str) -> ConfigResult<()> {
        if !value.starts_with("http://") && !value.starts_with("https://") {
            return Err(ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: "Must start with http:// or https://".to_string(),
            });
        }
        Ok(())
    }

    /// Parse an environment variable as u64 with a default value.
    fn parse_env_u64(var_name: &str, default: u64) -> ConfigResult<u64> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            livedns_base_url: DEFAULT_LIVEDNS_BASE_URL.to_string(),
            request_timeout: 30,
            default_language: None,
            contact_update_delay: 5,
            log_level: "error".to_string(),
        }
    }
}
