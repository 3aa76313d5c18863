//! Language availability classification.
//!
//! Two imperfect sources describe which languages a file carries: the
//! catalog's declared lists and the inspected streams. Precedence between
//! them is decided once per call, never per language.

use crate::models::config::LanguagePrecedence;
use crate::models::media::{DeclaredLanguageInfo, StreamLanguages};
use crate::models::proposal::{LanguageAvailability, LanguageFlags};

/// ISO 639-2 codes (bibliographic and terminologic) mapped to ISO 639-1.
const ALIASES: &[(&str, &str)] = &[
    ("ger", "de"),
    ("deu", "de"),
    ("eng", "en"),
    ("jpn", "ja"),
    ("fre", "fr"),
    ("fra", "fr"),
    ("spa", "es"),
    ("ita", "it"),
    ("chi", "zh"),
    ("zho", "zh"),
    ("kor", "ko"),
    ("rus", "ru"),
    ("por", "pt"),
];

/// Normalize a language code or tag to a lowercase primary code.
fn normalize(code: &str) -> String {
    let primary = code
        .trim()
        .split(['-', '_'])
        .next()
        .unwrap_or_default()
        .to_ascii_lowercase();

    ALIASES
        .iter()
        .find(|(alias, _)| *alias == primary)
        .map(|(_, canonical)| canonical.to_string())
        .unwrap_or(primary)
}

/// Case-insensitive code/tag match (`de` matches `DE`, `ger`, `de-DE`).
pub fn language_matches(entry: &str, target: &str) -> bool {
    let entry = normalize(entry);
    !entry.is_empty() && entry == normalize(target)
}

/// Evidence lists chosen for one classification call.
#[derive(Debug, Default)]
struct Evidence<'a> {
    audio: Vec<&'a str>,
    text: Vec<&'a str>,
}

fn active(entries: &[Option<String>]) -> Vec<&str> {
    entries
        .iter()
        .filter_map(|e| e.as_deref())
        .filter(|e| !e.trim().is_empty())
        .collect()
}

/// Classifies dub/sub availability for a set of target languages.
#[derive(Debug, Clone, Copy)]
pub struct LanguageClassifier {
    precedence: LanguagePrecedence,
}

impl LanguageClassifier {
    pub fn new(precedence: LanguagePrecedence) -> Self {
        Self { precedence }
    }

    fn evidence<'a>(
        &self,
        declared: Option<&'a DeclaredLanguageInfo>,
        streams: Option<&'a StreamLanguages>,
    ) -> Evidence<'a> {
        let stream_audio = streams.map(|s| active(&s.audio)).unwrap_or_default();
        let stream_text = streams.map(|s| active(&s.text)).unwrap_or_default();

        match self.precedence {
            LanguagePrecedence::AllOrNothing => match declared {
                Some(d) if d.is_complete() => {
                    tracing::debug!("Using declared languages");
                    Evidence {
                        audio: d.audio().unwrap_or_default(),
                        text: d.subs().unwrap_or_default(),
                    }
                }
                _ => {
                    tracing::debug!("Declared languages incomplete, using streams");
                    Evidence {
                        audio: stream_audio,
                        text: stream_text,
                    }
                }
            },
            LanguagePrecedence::PerAxis => Evidence {
                audio: declared.and_then(|d| d.audio()).unwrap_or(stream_audio),
                text: declared.and_then(|d| d.subs()).unwrap_or(stream_text),
            },
        }
    }

    /// Dub/sub flags for every target language.
    ///
    /// Missing evidence on both sides yields all-false flags.
    pub fn classify<S: AsRef<str>>(
        &self,
        declared: Option<&DeclaredLanguageInfo>,
        streams: Option<&StreamLanguages>,
        targets: &[S],
    ) -> LanguageAvailability {
        let evidence = self.evidence(declared, streams);

        targets
            .iter()
            .map(|target| {
                let target = target.as_ref();
                let flags = LanguageFlags {
                    has_dub: evidence.audio.iter().any(|a| language_matches(a, target)),
                    has_sub: evidence.text.iter().any(|t| language_matches(t, target)),
                };
                (target.to_string(), flags)
            })
            .collect()
    }
}

impl Default for LanguageClassifier {
    fn default() -> Self {
        Self::new(LanguagePrecedence::AllOrNothing)
    }
}
