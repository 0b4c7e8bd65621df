//! Test fixtures and in-memory collaborators for integration testing

#![allow(dead_code)]

use async_trait::async_trait;
use lichess_gist::config::Credentials;
use lichess_gist::error::{GistError, Result};
use lichess_gist::gist::SnippetStore;
use lichess_gist::lichess::RatingProvider;
use lichess_gist::types::{PerfMap, PerfRecord, Snippet, SnippetFile, SnippetUpdate};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

pub fn test_credentials() -> Credentials {
    Credentials {
        gist_id: "f00dcafe".to_string(),
        github_token: "ghp_test_token".to_string(),
        lichess_username: "test_player".to_string(),
    }
}

/// Build a perf map, keeping the given order
pub fn perf_map(entries: &[(&str, i64, u64, bool)]) -> PerfMap {
    entries
        .iter()
        .map(|(key, rating, games, provisional)| {
            (
                key.to_string(),
                PerfRecord {
                    rating: *rating,
                    games: *games,
                    prov: provisional.then_some(true),
                },
            )
        })
        .collect()
}

/// Rating provider serving a fixed perf map and counting calls
#[derive(Debug, Default)]
pub struct StaticRatingProvider {
    perfs: PerfMap,
    calls: AtomicUsize,
}

impl StaticRatingProvider {
    pub fn new(perfs: PerfMap) -> Self {
        Self {
            perfs,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RatingProvider for StaticRatingProvider {
    async fn fetch_perfs(&self, _username: &str) -> Result<PerfMap> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.perfs.clone())
    }
}

/// Snippet store holding one gist in memory and recording every update
#[derive(Debug, Default)]
pub struct RecordingSnippetStore {
    snippet: Mutex<Snippet>,
    fetch_calls: AtomicUsize,
    updates: Mutex<Vec<(String, SnippetUpdate)>>,
}

impl RecordingSnippetStore {
    pub fn with_files(files: &[(&str, &str)]) -> Self {
        let snippet = Snippet {
            id: Some("f00dcafe".to_string()),
            description: Some("Lichess ratings".to_string()),
            files: files
                .iter()
                .map(|(name, content)| {
                    (
                        name.to_string(),
                        SnippetFile {
                            filename: Some(name.to_string()),
                            content: Some(content.to_string()),
                        },
                    )
                })
                .collect(),
        };
        Self {
            snippet: Mutex::new(snippet),
            ..Self::default()
        }
    }

    pub fn fetch_count(&self) -> usize {
        self.fetch_calls.load(Ordering::SeqCst)
    }

    pub fn updates(&self) -> Vec<(String, SnippetUpdate)> {
        self.updates
            .lock()
            .map(|updates| updates.clone())
            .unwrap_or_default()
    }

    /// Current state of the stored gist
    pub fn snippet(&self) -> Snippet {
        self.snippet
            .lock()
            .map(|snippet| snippet.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl SnippetStore for RecordingSnippetStore {
    async fn fetch_snippet(&self, _snippet_id: &str) -> Result<Snippet> {
        self.fetch_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.snippet())
    }

    async fn update_snippet(&self, snippet_id: &str, update: SnippetUpdate) -> Result<()> {
        let mut snippet = self.snippet.lock().map_err(|_| GistError::SnippetStore {
            status: 500,
            message: "snippet lock poisoned".to_string(),
        })?;

        snippet.description = Some(update.description.clone());
        for (name, file) in &update.files {
            let entry = snippet.files.entry(name.clone()).or_default();
            entry.content = Some(file.content.clone());
        }
        drop(snippet);

        if let Ok(mut updates) = self.updates.lock() {
            updates.push((snippet_id.to_string(), update));
        }
        Ok(())
    }
}
