//! Gist updater orchestration
//!
//! This module wires the rating service, the formatter and the snippet
//! publisher into the single pass the binary performs.

use crate::config::{AppConfig, Credentials};
use crate::error::Result;
use crate::gist::{GistClient, SnippetPublisher, SnippetStore};
use crate::lichess::{LichessClient, RatingProvider};
use crate::rating::{extract_ratings, render_lines, render_listing};
use std::sync::Arc;
use tracing::{debug, info};

/// Outcome of a successful run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateSummary {
    /// Gist file that received the listing
    pub file_name: String,
    pub variant_count: usize,
    /// Exact text that was published
    pub content: String,
}

/// Fetches ratings, renders them and publishes the listing
pub struct GistUpdater {
    credentials: Credentials,
    ratings: Arc<dyn RatingProvider>,
    publisher: SnippetPublisher,
}

impl GistUpdater {
    /// Create an updater with explicit collaborators
    pub fn new(
        credentials: Credentials,
        ratings: Arc<dyn RatingProvider>,
        store: Arc<dyn SnippetStore>,
    ) -> Self {
        Self {
            credentials,
            ratings,
            publisher: SnippetPublisher::new(store),
        }
    }

    /// Create an updater talking to lichess and GitHub
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let ratings = Arc::new(LichessClient::new(config)?);
        let store = Arc::new(GistClient::new(config)?);
        Ok(Self::new(config.credentials.clone(), ratings, store))
    }

    /// Fetch and render the listing without publishing it
    pub async fn build_listing(&self) -> Result<(usize, String)> {
        let username = &self.credentials.lichess_username;
        let perfs = self.ratings.fetch_perfs(username).await?;
        info!("Fetched {} rated variants for {}", perfs.len(), username);

        let ratings = extract_ratings(&perfs);
        let lines = render_lines(&ratings)?;
        debug!("Rendered {} lines", lines.len());

        Ok((lines.len(), render_listing(&lines)))
    }

    /// Run one full update pass
    pub async fn run(&self) -> Result<UpdateSummary> {
        let (variant_count, content) = self.build_listing().await?;

        println!("{}", content);

        let file_name = self
            .publisher
            .publish(&self.credentials.gist_id, &content)
            .await?;
        info!(
            "Updated gist {} ({}) with {} variants",
            self.credentials.gist_id, file_name, variant_count
        );

        Ok(UpdateSummary {
            file_name,
            variant_count,
            content,
        })
    }
}
