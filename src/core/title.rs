//! Title preference resolution.
//!
//! Each title list is indexed once by language (and kind, for series
//! titles); preferences are then probed in rank order. The first title in
//! catalog order wins among duplicates.

use crate::models::catalog::{CatalogTitle, EpisodeTitle, TitleKind};
use std::collections::HashMap;

/// Index over series titles keyed by kind, then language.
#[derive(Debug)]
pub struct SeriesTitleIndex<'a> {
    by_kind: HashMap<TitleKind, HashMap<&'a str, &'a str>>,
}

impl<'a> SeriesTitleIndex<'a> {
    pub fn new(titles: &'a [CatalogTitle]) -> Self {
        let mut by_kind: HashMap<TitleKind, HashMap<&'a str, &'a str>> = HashMap::new();
        for title in titles {
            by_kind
                .entry(title.kind)
                .or_default()
                .entry(title.language.as_str())
                .or_insert(title.text.as_str());
        }
        Self { by_kind }
    }

    /// First title of `kind` in the highest-ranked language that has one,
    /// as `(language, text)`.
    pub fn best(&self, kind: TitleKind, preference: &[String]) -> Option<(&'a str, &'a str)> {
        let by_language = self.by_kind.get(&kind)?;
        preference.iter().find_map(|lang| {
            by_language
                .get_key_value(lang.as_str())
                .map(|(l, text)| (*l, *text))
        })
    }
}

/// Resolve a series title, falling back to `fallback` when no preferred
/// language carries a title of `kind`.
pub fn resolve_series_title<'a>(
    titles: &'a [CatalogTitle],
    kind: TitleKind,
    preference: &[String],
    fallback: &'a str,
) -> &'a str {
    match SeriesTitleIndex::new(titles).best(kind, preference) {
        Some((lang, text)) => {
            tracing::debug!("Series title [{}]: {}", lang, text);
            text
        }
        None => {
            tracing::debug!("No preferred series title, using fallback: {}", fallback);
            fallback
        }
    }
}

/// Resolve an episode title by language only.
///
/// With no preferred language present the first title is used as is.
/// Returns `None` only for an episode without any titles.
pub fn resolve_episode_title<'a>(
    titles: &'a [EpisodeTitle],
    preference: &[String],
) -> Option<&'a str> {
    let mut by_language: HashMap<&str, &str> = HashMap::with_capacity(titles.len());
    for title in titles {
        by_language
            .entry(title.language.as_str())
            .or_insert(title.text.as_str());
    }

    preference
        .iter()
        .find_map(|lang| by_language.get(lang.as_str()).copied())
        .or_else(|| titles.first().map(|t| t.text.as_str()))
}
