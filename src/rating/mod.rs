//! Rating extraction and line formatting
//!
//! This module sorts the per-variant ratings reported by lichess and renders
//! them into the aligned text listing that gets published.

pub mod extractor;
pub mod formatter;

// Re-export commonly used items
pub use extractor::extract_ratings;
pub use formatter::{format_line, render_lines, render_listing, BASE_LINE_WIDTH};
