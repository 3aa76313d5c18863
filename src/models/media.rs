//! Media-related data models.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Stream languages reported by media inspection.
///
/// Entries are optional because containers frequently carry untagged
/// streams; those never count as evidence for any language.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamLanguages {
    /// Language code per audio stream.
    #[serde(default)]
    pub audio: Vec<Option<String>>,
    /// Language code per subtitle/text stream.
    #[serde(default)]
    pub text: Vec<Option<String>>,
}

impl StreamLanguages {
    pub fn new<A, T>(audio: A, text: T) -> Self
    where
        A: IntoIterator,
        A::Item: Into<String>,
        T: IntoIterator,
        T::Item: Into<String>,
    {
        Self {
            audio: audio.into_iter().map(|l| Some(l.into())).collect(),
            text: text.into_iter().map(|l| Some(l.into())).collect(),
        }
    }
}

/// Catalog-declared audio and subtitle languages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeclaredLanguageInfo {
    /// Declared audio languages.
    #[serde(default)]
    pub audio: Option<Vec<String>>,
    /// Declared subtitle languages.
    #[serde(default)]
    pub subs: Option<Vec<String>>,
}

impl DeclaredLanguageInfo {
    pub fn new<A, S>(audio: A, subs: S) -> Self
    where
        A: IntoIterator,
        A::Item: Into<String>,
        S: IntoIterator,
        S::Item: Into<String>,
    {
        Self {
            audio: Some(audio.into_iter().map(Into::into).collect()),
            subs: Some(subs.into_iter().map(Into::into).collect()),
        }
    }

    /// Non-blank declared audio languages, if any.
    pub fn audio(&self) -> Option<Vec<&str>> {
        non_blank(self.audio.as_deref())
    }

    /// Non-blank declared subtitle languages, if any.
    pub fn subs(&self) -> Option<Vec<&str>> {
        non_blank(self.subs.as_deref())
    }

    /// Both axes carry at least one non-blank language.
    pub fn is_complete(&self) -> bool {
        self.audio().is_some() && self.subs().is_some()
    }
}

fn non_blank(list: Option<&[String]>) -> Option<Vec<&str>> {
    let langs: Vec<&str> = list?
        .iter()
        .map(|l| l.trim())
        .filter(|l| !l.is_empty())
        .collect();
    (!langs.is_empty()).then_some(langs)
}

/// A media file to be named and placed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MediaFile {
    /// Current full path of the file.
    pub path: PathBuf,
    /// Extension without the dot. Derived from `path` when absent.
    #[serde(default)]
    pub extension: Option<String>,
    /// Release group short name.
    #[serde(default)]
    pub release_group: Option<String>,
    /// Inspected stream languages, `None` when inspection was unavailable.
    #[serde(default)]
    pub streams: Option<StreamLanguages>,
}

impl MediaFile {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            path: path.into(),
            ..Default::default()
        }
    }

    pub fn with_streams(mut self, streams: StreamLanguages) -> Self {
        self.streams = Some(streams);
        self
    }

    /// Extension taken verbatim from the file.
    pub fn extension(&self) -> Option<String> {
        match self.extension.as_deref() {
            Some(ext) => {
                let ext = ext.trim_start_matches('.');
                (!ext.is_empty()).then(|| ext.to_string())
            }
            None => crate::utils::fs::get_extension(&self.path),
        }
    }
}

/// A configured storage root, matched by exact string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageRoot {
    /// Root location path.
    pub location: String,
}

impl StorageRoot {
    pub fn new(location: &str) -> Self {
        Self {
            location: location.to_string(),
        }
    }
}
