//! Main application configuration
//!
//! This module defines the configuration structures for the gist updater,
//! including environment variable loading and validation.

use crate::error::GistError;
use anyhow::{anyhow, Result};
use std::env;
use std::fmt;
use std::time::Duration;

pub const ENV_VAR_GIST_ID: &str = "GIST_ID";
pub const ENV_VAR_GITHUB_TOKEN: &str = "GH_TOKEN";
pub const ENV_VAR_LICHESS_USERNAME: &str = "LICHESS_USERNAME";

/// Variables that must be present and non-empty, in reporting order
pub const REQUIRED_ENVS: [&str; 3] = [
    ENV_VAR_GIST_ID,
    ENV_VAR_GITHUB_TOKEN,
    ENV_VAR_LICHESS_USERNAME,
];

/// Main application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub credentials: Credentials,
    pub service: ServiceSettings,
}

/// Values identifying whose ratings go where
#[derive(Clone)]
pub struct Credentials {
    pub gist_id: String,
    pub github_token: String,
    pub lichess_username: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("gist_id", &self.gist_id)
            .field("github_token", &"<redacted>")
            .field("lichess_username", &self.lichess_username)
            .finish()
    }
}

/// Service-level settings
#[derive(Debug, Clone)]
pub struct ServiceSettings {
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Base URL of the lichess API
    pub lichess_api_url: String,
    /// Base URL of the GitHub REST API
    pub github_api_url: String,
    /// User-Agent sent with every request
    pub user_agent: String,
    /// Per-request timeout; the transport default applies when unset
    pub request_timeout_seconds: Option<u64>,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            lichess_api_url: "https://lichess.org".to_string(),
            github_api_url: "https://api.github.com".to_string(),
            user_agent: format!("lichess-gist/{}", env!("CARGO_PKG_VERSION")),
            request_timeout_seconds: None,
        }
    }
}

impl AppConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration from an arbitrary variable lookup
    ///
    /// Required variables are checked before anything else so the error can
    /// list every one that is missing.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let present = |name: &str| lookup(name).filter(|value| !value.is_empty());

        let missing: Vec<String> = REQUIRED_ENVS
            .into_iter()
            .filter(|name| present(name).is_none())
            .map(|name| name.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(GistError::MissingConfiguration { missing }.into());
        }

        let credentials = Credentials {
            gist_id: present(ENV_VAR_GIST_ID).unwrap_or_default(),
            github_token: present(ENV_VAR_GITHUB_TOKEN).unwrap_or_default(),
            lichess_username: present(ENV_VAR_LICHESS_USERNAME).unwrap_or_default(),
        };

        let mut service = ServiceSettings::default();
        if let Some(log_level) = present("LOG_LEVEL") {
            service.log_level = log_level;
        }
        if let Some(url) = present("LICHESS_API_URL") {
            service.lichess_api_url = url;
        }
        if let Some(url) = present("GITHUB_API_URL") {
            service.github_api_url = url;
        }
        if let Some(timeout) = present("REQUEST_TIMEOUT_SECONDS") {
            service.request_timeout_seconds = Some(
                timeout
                    .parse()
                    .map_err(|_| anyhow!("Invalid REQUEST_TIMEOUT_SECONDS value: {}", timeout))?,
            );
        }

        let config = Self {
            credentials,
            service,
        };
        validate_config(&config)?;
        Ok(config)
    }

    /// Get the request timeout as Duration, if one is configured
    pub fn request_timeout(&self) -> Option<Duration> {
        self.service.request_timeout_seconds.map(Duration::from_secs)
    }
}

/// Validate configuration values
pub fn validate_config(config: &AppConfig) -> Result<()> {
    let invalid = |message: String| GistError::InvalidConfiguration { message };

    match config.service.log_level.to_lowercase().as_str() {
        "trace" | "debug" | "info" | "warn" | "error" => {}
        _ => {
            return Err(invalid(format!("Invalid log level: {}", config.service.log_level)).into())
        }
    }

    for (name, url) in [
        ("LICHESS_API_URL", &config.service.lichess_api_url),
        ("GITHUB_API_URL", &config.service.github_api_url),
    ] {
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(invalid(format!("{} must be an http(s) URL: {}", name, url)).into());
        }
    }

    if config.service.request_timeout_seconds == Some(0) {
        return Err(invalid("Request timeout must be greater than 0".to_string()).into());
    }

    Ok(())
}
