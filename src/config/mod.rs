//! Configuration management for the lichess-gist updater
//!
//! This module handles configuration loading from environment variables,
//! validation, and the static per-variant display table.

pub mod app;
pub mod display;

// Re-export commonly used types
pub use app::{validate_config, AppConfig, Credentials, ServiceSettings, REQUIRED_ENVS};
pub use display::{display_for, VARIANT_DISPLAYS};
