//! Publishes the rendered listing into an existing gist

use crate::error::{GistError, Result};
use crate::gist::client::SnippetStore;
use crate::types::SnippetUpdate;
use std::sync::Arc;
use tracing::info;

/// Overwrites the first file of a gist with new text
pub struct SnippetPublisher {
    store: Arc<dyn SnippetStore>,
}

impl SnippetPublisher {
    /// Create a new publisher backed by the given store
    pub fn new(store: Arc<dyn SnippetStore>) -> Self {
        Self { store }
    }

    /// Replace the content of the gist's first file and clear its description
    ///
    /// The first file is the first key of `files` in the order the store
    /// returned them; GitHub lists gist files sorted by filename. Returns the
    /// name of the file that was written.
    pub async fn publish(&self, snippet_id: &str, text: &str) -> Result<String> {
        let snippet = self.store.fetch_snippet(snippet_id).await?;
        let file_name = snippet
            .first_file_name()
            .ok_or_else(|| GistError::EmptySnippet {
                gist_id: snippet_id.to_string(),
            })?
            .to_string();

        self.store
            .update_snippet(snippet_id, SnippetUpdate::overwrite(file_name.clone(), text))
            .await?;

        info!("Published {} bytes to {}", text.len(), file_name);
        Ok(file_name)
    }
}
