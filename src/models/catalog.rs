//! Catalog data models.
//!
//! These mirror what the catalog reports for a series and its episodes.
//! Everything here is read-only input to the naming engines.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Kind of a catalog title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TitleKind {
    Official,
    Short,
    Synonym,
    Main,
    Card,
    Kana,
    Other,
}

impl Default for TitleKind {
    fn default() -> Self {
        TitleKind::Official
    }
}

/// A single series title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogTitle {
    /// Language code (e.g., "de", "en", "x-jat").
    pub language: String,
    /// Title kind.
    #[serde(default)]
    pub kind: TitleKind,
    /// Title text.
    pub text: String,
}

impl CatalogTitle {
    pub fn new(language: &str, kind: TitleKind, text: &str) -> Self {
        Self {
            language: language.to_string(),
            kind,
            text: text.to_string(),
        }
    }
}

/// Series media kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Normal,
    Movie,
}

impl Default for MediaKind {
    fn default() -> Self {
        MediaKind::Normal
    }
}

/// Episode classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EpisodeKind {
    Episode,
    Credits,
    Special,
    Trailer,
    Parody,
    Other,
}

impl EpisodeKind {
    /// Letter prefix used in episode codes.
    pub fn prefix(&self) -> &'static str {
        match self {
            EpisodeKind::Episode => "E",
            EpisodeKind::Credits => "C",
            EpisodeKind::Special => "S",
            EpisodeKind::Trailer => "T",
            EpisodeKind::Parody => "P",
            EpisodeKind::Other => "O",
        }
    }
}

impl std::fmt::Display for EpisodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EpisodeKind::Episode => write!(f, "episode"),
            EpisodeKind::Credits => write!(f, "credits"),
            EpisodeKind::Special => write!(f, "special"),
            EpisodeKind::Trailer => write!(f, "trailer"),
            EpisodeKind::Parody => write!(f, "parody"),
            EpisodeKind::Other => write!(f, "other"),
        }
    }
}

/// Highest episode number per kind, used for zero padding.
pub type EpisodeCounters = HashMap<EpisodeKind, u32>;

/// Series as reported by the catalog.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogSeries {
    /// Catalog's preferred title, used when no preferred language matches.
    pub preferred_title: String,
    /// Normal series or movie.
    #[serde(default)]
    pub media_kind: MediaKind,
    /// Age-restricted flag.
    #[serde(default)]
    pub restricted: bool,
    /// Episode counts per kind.
    #[serde(default)]
    pub episode_counters: EpisodeCounters,
    /// Titles in catalog order.
    #[serde(default)]
    pub titles: Vec<CatalogTitle>,
}

impl CatalogSeries {
    pub fn is_movie(&self) -> bool {
        self.media_kind == MediaKind::Movie
    }
}

/// Episode title (no kind axis).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EpisodeTitle {
    /// Language code.
    pub language: String,
    /// Title text.
    pub text: String,
}

impl EpisodeTitle {
    pub fn new(language: &str, text: &str) -> Self {
        Self {
            language: language.to_string(),
            text: text.to_string(),
        }
    }
}

/// Episode as reported by the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogEpisode {
    /// Episode kind.
    pub kind: EpisodeKind,
    /// Episode number within its kind.
    pub number: u32,
    /// Titles in catalog order.
    #[serde(default)]
    pub titles: Vec<EpisodeTitle>,
}
