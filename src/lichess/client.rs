//! Rating service interface and the lichess HTTP implementation

use crate::config::AppConfig;
use crate::error::{GistError, Result};
use crate::types::{PerfMap, PerfRecord};
use crate::utils::{build_http_client, endpoint_url, error_body};
use async_trait::async_trait;
use indexmap::IndexMap;
use reqwest::{header, Client};
use serde::Deserialize;
use tracing::debug;

/// Trait for fetching a player's per-variant performances
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RatingProvider: Send + Sync {
    /// Fetch the rated perfs of `username`, in the order the service lists them
    async fn fetch_perfs(&self, username: &str) -> Result<PerfMap>;
}

/// Public user document, reduced to what the updater reads
#[derive(Debug, Deserialize)]
struct PublicUser {
    #[serde(default)]
    username: Option<String>,
    #[serde(default)]
    perfs: IndexMap<String, serde_json::Value>,
}

/// Keep the perfs that carry a rating; score-only modes such as `storm` are dropped
fn rated_perfs(perfs: IndexMap<String, serde_json::Value>) -> PerfMap {
    perfs
        .into_iter()
        .filter_map(
            |(key, value)| match serde_json::from_value::<PerfRecord>(value) {
                Ok(record) => Some((key, record)),
                Err(e) => {
                    debug!("Skipping unrated perf {}: {}", key, e);
                    None
                }
            },
        )
        .collect()
}

/// lichess.org client for public user data
#[derive(Debug, Clone)]
pub struct LichessClient {
    base_url: String,
    http: Client,
}

impl LichessClient {
    /// Create a client from the application configuration
    pub fn new(config: &AppConfig) -> Result<Self> {
        Ok(Self::with_client(
            config.service.lichess_api_url.clone(),
            build_http_client(config)?,
        ))
    }

    /// Create a client with a custom base URL and HTTP client
    pub fn with_client(base_url: impl Into<String>, http: Client) -> Self {
        Self {
            base_url: base_url.into(),
            http,
        }
    }
}

#[async_trait]
impl RatingProvider for LichessClient {
    async fn fetch_perfs(&self, username: &str) -> Result<PerfMap> {
        let url = endpoint_url(&self.base_url, &["api", "user", username])?;
        debug!("Fetching public data for {}", username);

        let response = self
            .http
            .get(url)
            .header(header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(GistError::from)?;

        let status = response.status();
        if !status.is_success() {
            return Err(GistError::RatingService {
                status: status.as_u16(),
                message: error_body(response).await,
            }
            .into());
        }

        let user: PublicUser = response.json().await.map_err(GistError::from)?;
        let perfs = rated_perfs(user.perfs);
        debug!(
            "Received {} rated perfs for {}",
            perfs.len(),
            user.username.as_deref().unwrap_or(username)
        );
        Ok(perfs)
    }
}
