//! Common types used throughout the gist updater

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Lichess perf key, e.g. `blitz` or `kingOfTheHill`
pub type VariantKey = String;

/// Per-variant performances in the order the rating service reported them
pub type PerfMap = IndexMap<VariantKey, PerfRecord>;

/// One entry of the `perfs` object of a lichess public user document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerfRecord {
    pub rating: i64,
    pub games: u64,
    /// Set by lichess while the rating is still provisional
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prov: Option<bool>,
}

impl PerfRecord {
    /// True only for `prov: true`; an explicit `prov: false` is not provisional
    pub fn is_provisional(&self) -> bool {
        self.prov.unwrap_or(false)
    }
}

/// Rating information for a single variant, ready for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantRating {
    pub variant: VariantKey,
    pub rating: i64,
    /// `"?"` for provisional ratings, empty otherwise
    pub provisional_marker: &'static str,
    pub games_played: u64,
}

/// Static display metadata for a variant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariantDisplay {
    pub key: &'static str,
    pub label: &'static str,
    pub glyph: &'static str,
    /// Added to the base line width for glyphs that render wider or narrower
    /// than their character count
    pub padding: usize,
}

/// A gist as returned by the snippet store
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Snippet {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub files: IndexMap<String, SnippetFile>,
}

impl Snippet {
    /// Name of the first file, in the order the service listed them
    pub fn first_file_name(&self) -> Option<&str> {
        self.files.keys().next().map(String::as_str)
    }
}

/// A single file inside a gist
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SnippetFile {
    #[serde(default)]
    pub filename: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

/// Body of a gist overwrite request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SnippetUpdate {
    pub description: String,
    pub files: IndexMap<String, FileContent>,
}

impl SnippetUpdate {
    /// Replace one file's content and clear the description
    pub fn overwrite(file_name: impl Into<String>, content: impl Into<String>) -> Self {
        let mut files = IndexMap::new();
        files.insert(
            file_name.into(),
            FileContent {
                content: content.into(),
            },
        );
        Self {
            description: String::new(),
            files,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileContent {
    pub content: String,
}
