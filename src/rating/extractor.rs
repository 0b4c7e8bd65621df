//! Turns the rating service's per-variant performances into display order

use crate::types::{PerfMap, VariantRating};

const PROVISIONAL_MARKER: &str = "?";

/// Build one `VariantRating` per perf, highest rating first.
///
/// Equal ratings keep the order the service reported them in.
pub fn extract_ratings(perfs: &PerfMap) -> Vec<VariantRating> {
    let mut ratings: Vec<VariantRating> = perfs
        .iter()
        .map(|(variant, record)| VariantRating {
            variant: variant.clone(),
            rating: record.rating,
            provisional_marker: if record.is_provisional() {
                PROVISIONAL_MARKER
            } else {
                ""
            },
            games_played: record.games,
        })
        .collect();

    // sort_by is stable
    ratings.sort_by(|a, b| b.rating.cmp(&a.rating));
    ratings
}
