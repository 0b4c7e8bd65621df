//! Fixed-width rating lines
//!
//! Every line is `<glyph><label>(<games>) <filler> <rating><marker> <trend>`,
//! with the filler run sized so ratings right-align across lines. Widths are
//! counted in Unicode scalar values, which is what the padding table in
//! [`crate::config::display`] is tuned against.

use crate::config::display::display_for;
use crate::error::GistError;
use crate::types::{VariantDisplay, VariantRating};

/// Line width before the per-variant padding is added
pub const BASE_LINE_WIDTH: usize = 52;

/// Character repeated between the game count and the rating
pub const FILLER: char = '.';

/// Glyph appended after every rating
pub const TREND_GLYPH: &str = "📈";

// Parentheses around the game count and the spaces around the filler
const FIXED_CHARS: usize = 4;

/// Target width of a variant's line
pub fn line_width(display: &VariantDisplay) -> usize {
    BASE_LINE_WIDTH + display.padding
}

/// Render a single rating line
pub fn format_line(rating: &VariantRating, display: &VariantDisplay) -> String {
    let title = format!("{}{}", display.glyph, display.label);
    let games = rating.games_played.to_string();
    let score = format!(
        "{}{} {}",
        rating.rating, rating.provisional_marker, TREND_GLYPH
    );

    let used = title.chars().count() + games.chars().count() + score.chars().count() + FIXED_CHARS;
    let filler_len = line_width(display).saturating_sub(used);
    let filler: String = std::iter::repeat(FILLER).take(filler_len).collect();

    format!("{}({}) {} {}", title, games, filler, score)
}

/// Render every rating, failing on the first variant without display metadata
pub fn render_lines(ratings: &[VariantRating]) -> Result<Vec<String>, GistError> {
    ratings
        .iter()
        .map(|rating| {
            display_for(&rating.variant)
                .map(|display| format_line(rating, display))
                .ok_or_else(|| GistError::MissingDisplayMetadata {
                    variant: rating.variant.clone(),
                })
        })
        .collect()
}

/// Join rendered lines into the published text
pub fn render_listing(lines: &[String]) -> String {
    lines.join("\n")
}
