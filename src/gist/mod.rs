//! Snippet store collaborator and publisher
//!
//! This module talks to the GitHub gist API and owns the rule for which file
//! of a gist receives the listing.

pub mod client;
pub mod publisher;

pub use client::{GistClient, SnippetStore};
pub use publisher::SnippetPublisher;
