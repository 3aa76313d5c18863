//! Filename generator.

use crate::utils::sanitize::{sanitize_filename, truncate_chars};
use crate::Result;

/// Inputs for one filename.
#[derive(Debug, Clone, Default)]
pub struct FilenameParts<'a> {
    /// Resolved series title.
    pub series_title: &'a str,
    /// Episode code (`E007`, `S03`, `E007-E009`).
    pub episode_code: &'a str,
    /// Resolved episode titles, one per grouped episode.
    pub episode_titles: Vec<&'a str>,
    /// Movies carry no episode code.
    pub is_movie: bool,
    /// Release group short name, if it should lead the name.
    pub release_group: Option<&'a str>,
    /// Extension without the dot, verbatim from the source.
    pub extension: Option<&'a str>,
}

/// Leading part of the name: optional group tag and the series title.
fn head(parts: &FilenameParts) -> String {
    match parts.release_group.filter(|g| !g.trim().is_empty()) {
        Some(group) => format!("[{}] {}", group.trim(), parts.series_title),
        None => parts.series_title.to_string(),
    }
}

/// The ` - {code}` segment, empty for movies.
fn code_segment(parts: &FilenameParts) -> String {
    if parts.is_movie {
        String::new()
    } else {
        format!(" - {}", parts.episode_code)
    }
}

/// The ` - {title1}/{title2}` segment, empty without titles.
fn titles_segment(parts: &FilenameParts) -> String {
    if parts.episode_titles.is_empty() {
        String::new()
    } else {
        format!(" - {}", parts.episode_titles.join("/"))
    }
}

/// Compose the name before the extension, unsanitized and untruncated.
///
/// Format: `[${group}] ${seriesTitle} - ${episodeCode} - ${title1}/${title2}`
pub fn compose(parts: &FilenameParts) -> String {
    format!(
        "{}{}{}",
        head(parts),
        code_segment(parts),
        titles_segment(parts)
    )
}

/// Cut the composed name to `max_length` characters.
///
/// The episode code is kept whole. Episode titles are cut first, then the
/// series title is shortened so the code still fits. The code is dropped
/// only when nothing of the series title would remain.
fn truncate_parts(parts: &FilenameParts, max_length: usize) -> String {
    let composed = compose(parts);
    if composed.chars().count() <= max_length {
        return composed;
    }

    let head = head(parts);
    let code = code_segment(parts);
    let head_len = head.chars().count() + code.chars().count();

    if head_len <= max_length {
        let titles = truncate_chars(&titles_segment(parts), max_length - head_len);
        return format!("{}{}{}", head, code, titles);
    }

    let budget = max_length.saturating_sub(code.chars().count());
    let short_head = truncate_chars(&head, budget);
    if short_head.trim().is_empty() {
        return truncate_chars(&head, max_length);
    }
    format!("{}{}", short_head, code)
}

/// Build the sanitized stem: compose, truncate to `max_length` characters,
/// then sanitize.
pub fn build_stem(parts: &FilenameParts, max_length: usize) -> Result<String> {
    let truncated = truncate_parts(parts, max_length);
    let stem = sanitize_filename(&truncated);

    if stem.trim().is_empty() {
        return Err(crate::Error::NameGeneration(format!(
            "empty filename for series '{}'",
            parts.series_title
        )));
    }

    Ok(stem)
}

/// Build the full filename including the extension.
pub fn build_filename(parts: &FilenameParts, max_length: usize) -> Result<String> {
    let stem = build_stem(parts, max_length)?;

    Ok(match parts.extension.filter(|e| !e.is_empty()) {
        Some(ext) => format!("{}.{}", stem, ext),
        None => stem,
    })
}
