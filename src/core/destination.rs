//! Destination bucket resolution.
//!
//! Buckets are decided by an ordered rule list; the first rule whose
//! languages are present, or whose bucket already appears in the file's
//! current path, wins. Anything else lands in the fallback bucket.

use crate::generators::folder;
use crate::models::config::{DestinationRule, RenamerConfig};
use crate::models::media::StorageRoot;
use crate::models::proposal::{Destination, LanguageAvailability, LanguageFlags};
use crate::utils::fs::has_segment;

fn any_flag(
    langs: &LanguageAvailability,
    wanted: &[String],
    pick: fn(&LanguageFlags) -> bool,
) -> bool {
    wanted.iter().any(|lang| {
        langs
            .iter()
            .any(|(code, flags)| code.eq_ignore_ascii_case(lang) && pick(flags))
    })
}

impl DestinationRule {
    /// Whether this rule claims the file.
    pub fn matches(&self, langs: &LanguageAvailability, current_path: Option<&str>) -> bool {
        any_flag(langs, &self.dub, |f| f.has_dub)
            || any_flag(langs, &self.sub, |f| f.has_sub)
            || (self.sticky && current_path.is_some_and(|p| has_segment(p, &self.bucket)))
    }
}

/// Maps restriction, language evidence and path hints to a destination.
#[derive(Debug, Clone, Copy)]
pub struct DestinationResolver<'a> {
    config: &'a RenamerConfig,
}

impl<'a> DestinationResolver<'a> {
    pub fn new(config: &'a RenamerConfig) -> Self {
        Self { config }
    }

    /// Pick the bucket name.
    pub fn bucket(&self, langs: &LanguageAvailability, current_path: Option<&str>) -> &'a str {
        match self
            .config
            .rules
            .iter()
            .find(|rule| rule.matches(langs, current_path))
        {
            Some(rule) => {
                tracing::debug!("Bucket rule matched: {}", rule.bucket);
                &rule.bucket
            }
            None => {
                tracing::debug!("No bucket rule matched, using {}", self.config.fallback_bucket);
                &self.config.fallback_bucket
            }
        }
    }

    /// Resolve the full destination.
    ///
    /// A bucket path without a configured root is returned with `root: None`;
    /// the host leaves such files for manual handling.
    pub fn resolve(
        &self,
        restricted: bool,
        langs: &LanguageAvailability,
        current_path: Option<&str>,
        roots: &[StorageRoot],
        series_title: &str,
    ) -> Destination {
        let bucket = self.bucket(langs, current_path);
        let bucket_path = folder::bucket_path(self.config, restricted, bucket);
        let root = roots.iter().find(|r| r.location == bucket_path).cloned();

        if root.is_none() {
            tracing::warn!("No storage root configured for {}", bucket_path);
        }

        Destination {
            bucket: bucket.to_string(),
            bucket_path,
            root,
            sub_path: folder::series_folder(series_title),
        }
    }
}
