//! Utility functions shared by the HTTP clients

use crate::config::AppConfig;
use crate::error::GistError;
use reqwest::{Client, Url};

/// Build the reqwest client used for both services
pub fn build_http_client(config: &AppConfig) -> Result<Client, GistError> {
    let mut builder = Client::builder().user_agent(config.service.user_agent.clone());
    if let Some(timeout) = config.request_timeout() {
        builder = builder.timeout(timeout);
    }
    Ok(builder.build()?)
}

/// Append path segments to a base URL, percent-encoding each one
///
/// A segment containing `/`, `?` or `#` stays a single path segment.
pub fn endpoint_url(base: &str, segments: &[&str]) -> Result<Url, GistError> {
    let invalid = |reason: &str| GistError::InvalidConfiguration {
        message: format!("Invalid base URL {}: {}", base, reason),
    };

    let mut url = Url::parse(base).map_err(|e| invalid(&e.to_string()))?;
    url.path_segments_mut()
        .map_err(|_| invalid("cannot be a base"))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

/// Read an error body for diagnostics, tolerating unreadable bodies
pub async fn error_body(response: reqwest::Response) -> String {
    response
        .text()
        .await
        .unwrap_or_else(|e| format!("<unreadable body: {}>", e))
}
