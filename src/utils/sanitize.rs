//! Filename sanitization and truncation.
//!
//! Illegal characters are swapped for look-alike Unicode characters instead
//! of being dropped, so names stay readable and existing libraries keep
//! matching. The table must stay bit-exact.

/// Replacement for each filesystem-illegal character.
const SUBSTITUTIONS: &[(char, char)] = &[
    ('*', '★'),
    ('|', '¦'),
    ('\\', '⧹'),
    ('/', '⁄'),
    (':', '։'),
    ('"', '″'),
    ('>', '›'),
    ('<', '‹'),
    ('?', '？'),
];

const ELLIPSIS: &str = "...";
const ELLIPSIS_REPLACEMENT: &str = "…";
const LEADING_DOT_REPLACEMENT: char = '․';

/// Replace illegal characters and trim trailing whitespace.
///
/// Never lengthens the input (measured in characters) and is idempotent.
pub fn sanitize_filename(s: &str) -> String {
    let collapsed = s.replace(ELLIPSIS, ELLIPSIS_REPLACEMENT);

    let mut out = String::with_capacity(collapsed.len());
    for (i, c) in collapsed.chars().enumerate() {
        if i == 0 && c == '.' {
            out.push(LEADING_DOT_REPLACEMENT);
            continue;
        }
        let mapped = SUBSTITUTIONS
            .iter()
            .find(|(from, _)| *from == c)
            .map(|(_, to)| *to)
            .unwrap_or(c);
        out.push(mapped);
    }

    out.trim_end().to_string()
}

/// Cut `s` to at most `max_chars` characters.
///
/// A cut never ends on a dangling separator (` - `, `/`) or a partial
/// ellipsis, so the result reads as a complete component.
pub fn truncate_chars(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        return s.to_string();
    }

    let cut: String = s.chars().take(max_chars).collect();
    cut.trim_end_matches(|c: char| c.is_whitespace() || c == '-' || c == '/' || c == '.')
        .to_string()
}
