//! Display metadata for each lichess variant

use crate::types::VariantDisplay;

const fn variant(key: &'static str, glyph: &'static str, padding: usize) -> VariantDisplay {
    VariantDisplay {
        key,
        label: key,
        glyph,
        padding,
    }
}

/// Every variant lichess reports a rating for
pub static VARIANT_DISPLAYS: [VariantDisplay; 15] = [
    variant("puzzle", "\u{1f9e9}", 0),
    variant("crazyhouse", "\u{1f92a}", 0),
    variant(
        "chess960",
        "9\u{fe0f}\u{20e3}6\u{fe0f}\u{20e3}0\u{fe0f}\u{20e3}",
        0,
    ),
    variant("kingOfTheHill", "\u{1f451}", 0),
    variant("threeCheck", "3\u{fe0f}\u{20e3}", 2),
    variant("antichess", "", 0),
    variant("atomic", "\u{269b}", 0),
    variant("horde", "\u{1f40e}", 0),
    variant("racingKings", "\u{1f3c1}", 0),
    variant("ultraBullet", "\u{1f685}", 0),
    variant("blitz", "\u{26a1}", 1),
    variant("classical", "\u{1f3db}", 1),
    variant("rapid", "\u{23f0}", 0),
    variant("bullet", "\u{1f682}", 0),
    variant("correspondence", "\u{1f93c}\u{200d}\u{2642}\u{fe0f}", 3),
];

/// Look up the display entry for a variant key
pub fn display_for(key: &str) -> Option<&'static VariantDisplay> {
    VARIANT_DISPLAYS.iter().find(|display| display.key == key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_keys_are_unique() {
        let keys: HashSet<_> = VARIANT_DISPLAYS.iter().map(|d| d.key).collect();
        assert_eq!(keys.len(), VARIANT_DISPLAYS.len());
    }

    #[test]
    fn test_lookup() {
        let blitz = display_for("blitz").unwrap();
        assert_eq!(blitz.glyph, "⚡");
        assert_eq!(blitz.label, "blitz");
        assert_eq!(blitz.padding, 1);

        assert_eq!(display_for("correspondence").unwrap().padding, 3);
        assert_eq!(display_for("threeCheck").unwrap().padding, 2);
        assert_eq!(display_for("antichess").unwrap().glyph, "");
        assert!(display_for("storm").is_none());
    }

    #[test]
    fn test_multi_scalar_glyphs() {
        assert_eq!(display_for("chess960").unwrap().glyph.chars().count(), 9);
        assert_eq!(display_for("correspondence").unwrap().glyph.chars().count(), 4);
    }
}
