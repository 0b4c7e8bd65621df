//! Error types for the gist updater
//!
//! This module defines all error types using anyhow for consistent error handling
//! throughout the application.

/// Result type alias for convenience
pub type Result<T> = anyhow::Result<T>;

/// Custom error types for specific updater failures
#[derive(Debug, thiserror::Error)]
pub enum GistError {
    #[error("Please define [{}] in your github secrets. Aborting...", .missing.join(", "))]
    MissingConfiguration { missing: Vec<String> },

    #[error("Configuration error: {message}")]
    InvalidConfiguration { message: String },

    #[error("No display entry configured for variant: {variant}")]
    MissingDisplayMetadata { variant: String },

    #[error("Rating service returned {status}: {message}")]
    RatingService { status: u16, message: String },

    #[error("Snippet store returned {status}: {message}")]
    SnippetStore { status: u16, message: String },

    #[error("Gist {gist_id} has no files to update")]
    EmptySnippet { gist_id: String },

    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),
}
