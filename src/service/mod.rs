//! Service orchestration
//!
//! This module contains the updater that runs one fetch, format and publish
//! pass.

pub mod app;

pub use app::{GistUpdater, UpdateSummary};
