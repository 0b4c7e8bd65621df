//! Snippet store interface and the GitHub gist implementation

use crate::config::AppConfig;
use crate::error::{GistError, Result};
use crate::types::{Snippet, SnippetUpdate};
use crate::utils::{build_http_client, endpoint_url, error_body};
use async_trait::async_trait;
use reqwest::{header, Client, RequestBuilder, Response, Url};
use tracing::debug;

const GITHUB_ACCEPT: &str = "application/vnd.github+json";
const GITHUB_API_VERSION: &str = "2022-11-28";

/// Trait for reading and overwriting hosted snippets
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SnippetStore: Send + Sync {
    /// Fetch a snippet and its file listing
    async fn fetch_snippet(&self, snippet_id: &str) -> Result<Snippet>;

    /// Apply an update to a snippet
    async fn update_snippet(&self, snippet_id: &str, update: SnippetUpdate) -> Result<()>;
}

/// GitHub REST client for gists
#[derive(Clone)]
pub struct GistClient {
    base_url: String,
    token: String,
    http: Client,
}

impl std::fmt::Debug for GistClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GistClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl GistClient {
    /// Create a client from the application configuration
    pub fn new(config: &AppConfig) -> Result<Self> {
        Ok(Self::with_client(
            config.service.github_api_url.clone(),
            config.credentials.github_token.clone(),
            build_http_client(config)?,
        ))
    }

    /// Create a client with a custom base URL, token and HTTP client
    pub fn with_client(base_url: impl Into<String>, token: impl Into<String>, http: Client) -> Self {
        Self {
            base_url: base_url.into(),
            token: token.into(),
            http,
        }
    }

    fn gist_url(&self, snippet_id: &str) -> Result<Url> {
        Ok(endpoint_url(&self.base_url, &["gists", snippet_id])?)
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .bearer_auth(&self.token)
            .header(header::ACCEPT, GITHUB_ACCEPT)
            .header("X-GitHub-Api-Version", GITHUB_API_VERSION)
    }

    async fn check_response(response: Response) -> Result<Response> {
        let status = response.status();
        if !status.is_success() {
            return Err(GistError::SnippetStore {
                status: status.as_u16(),
                message: error_body(response).await,
            }
            .into());
        }
        Ok(response)
    }
}

#[async_trait]
impl SnippetStore for GistClient {
    async fn fetch_snippet(&self, snippet_id: &str) -> Result<Snippet> {
        debug!("Fetching gist {}", snippet_id);
        let response = self
            .authorized(self.http.get(self.gist_url(snippet_id)?))
            .send()
            .await
            .map_err(GistError::from)?;
        let response = Self::check_response(response).await?;
        let snippet: Snippet = response.json().await.map_err(GistError::from)?;
        Ok(snippet)
    }

    async fn update_snippet(&self, snippet_id: &str, update: SnippetUpdate) -> Result<()> {
        debug!("Updating gist {}", snippet_id);
        let response = self
            .authorized(self.http.patch(self.gist_url(snippet_id)?))
            .json(&update)
            .send()
            .await
            .map_err(GistError::from)?;
        Self::check_response(response).await?;
        Ok(())
    }
}
