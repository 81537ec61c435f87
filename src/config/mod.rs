//! Configuration module
//!
//! The bridge is configured entirely from environment variables, read once
//! at startup into an explicit [`Config`] that is passed by reference to the
//! components that need it.

use std::env;

use thiserror::Error;
use url::Url;

/// Default API endpoint when `NEXMEMORY_API_URL` is not set.
const DEFAULT_API_URL: &str = "http://localhost:3000/api";

/// Errors encountered while loading configuration from environment variables.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Environment variable contained a value that could not be parsed.
    #[error("Invalid value for {variable}: {message}")]
    InvalidValue {
        /// Name of the offending variable.
        variable: &'static str,
        /// Parse failure detail.
        message: String,
    },
}

/// Runtime configuration for the bridge process.
#[derive(Debug, Clone)]
pub struct Config {
    /// API credential, sent as both a bearer token and an `X-API-Key` header.
    /// Empty when `NEXMEMORY_API_KEY` is unset.
    pub api_key: String,

    /// Base URL of the NexMemory server, including any path prefix
    /// (e.g. `http://localhost:3000/api`).
    pub api_url: Url,

    /// Whether debug diagnostics are written to stderr.
    pub debug: bool,
}

impl Config {
    /// Load configuration from the environment.
    ///
    /// Every variable has a default; the only failure mode is an
    /// unparseable `NEXMEMORY_API_URL`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = env::var("NEXMEMORY_API_KEY").unwrap_or_default();

        let raw_url =
            env::var("NEXMEMORY_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        let api_url = Url::parse(&raw_url).map_err(|e| ConfigError::InvalidValue {
            variable: "NEXMEMORY_API_URL",
            message: e.to_string(),
        })?;

        // NEXMEMORY_DEBUG preferred; plain DEBUG accepted for compatibility.
        let debug = env::var("NEXMEMORY_DEBUG")
            .or_else(|_| env::var("DEBUG"))
            .map(|v| v == "true" || v == "1")
            .unwrap_or(false);

        Ok(Self {
            api_key,
            api_url,
            debug,
        })
    }
}
