//! lichess-gist - publishes a lichess player's ratings into a GitHub gist
//!
//! This crate fetches per-variant ratings from lichess, renders them into an
//! aligned text listing and overwrites the first file of a gist with it.

pub mod config;
pub mod error;
pub mod gist;
pub mod lichess;
pub mod rating;
pub mod service;
pub mod types;
pub mod utils;

// Re-export commonly used types and traits
pub use error::{GistError, Result};
pub use types::*;

// Re-export key components
pub use gist::{GistClient, SnippetPublisher, SnippetStore};
pub use lichess::{LichessClient, RatingProvider};
pub use service::{GistUpdater, UpdateSummary};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
