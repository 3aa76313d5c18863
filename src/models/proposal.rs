//! Rename request and proposal models.

use super::catalog::{CatalogEpisode, CatalogSeries};
use super::media::{DeclaredLanguageInfo, MediaFile, StorageRoot};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Everything the engine needs to name and place one file.
///
/// The host fills this from its catalog, media inspection and storage
/// registry. Missing data is expressed as `None`/empty, never as an error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RenameRequest {
    /// The file to name.
    pub file: MediaFile,
    /// Linked series, `None` when the file is not linked.
    #[serde(default)]
    pub series: Option<CatalogSeries>,
    /// Linked episodes in group order (same kind, contiguous).
    #[serde(default)]
    pub episodes: Vec<CatalogEpisode>,
    /// Catalog-declared languages for the file.
    #[serde(default)]
    pub declared: Option<DeclaredLanguageInfo>,
    /// Configured storage roots.
    #[serde(default)]
    pub roots: Vec<StorageRoot>,
}

/// Dub/sub availability for one language.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageFlags {
    pub has_dub: bool,
    pub has_sub: bool,
}

/// Availability per target language.
pub type LanguageAvailability = BTreeMap<String, LanguageFlags>;

/// Resolved destination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Destination {
    /// Selected bucket name.
    pub bucket: String,
    /// Computed bucket path that was looked up among the roots.
    pub bucket_path: String,
    /// Matching configured root, `None` when the bucket is not configured.
    pub root: Option<StorageRoot>,
    /// Sanitized series folder below the root.
    pub sub_path: String,
}

impl Destination {
    pub fn is_configured(&self) -> bool {
        self.root.is_some()
    }
}

/// A complete proposal for one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenameProposal {
    /// New filename including extension.
    pub filename: String,
    /// Where the file should go.
    pub destination: Destination,
    /// Evidence the destination was decided on.
    pub languages: LanguageAvailability,
}

/// Host-facing result: a proposal or a human-readable reason to skip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum RenameOutcome {
    Proposed(RenameProposal),
    Skipped { reason: String },
}

impl RenameOutcome {
    /// One-line description of the outcome.
    pub fn message(&self) -> String {
        match self {
            RenameOutcome::Proposed(p) => match &p.destination.root {
                Some(root) => format!(
                    "{} -> {} / {}",
                    p.filename, root.location, p.destination.sub_path
                ),
                None => format!(
                    "{} (no configured root for {}, leave for manual handling)",
                    p.filename, p.destination.bucket_path
                ),
            },
            RenameOutcome::Skipped { reason } => format!("skipped: {}", reason),
        }
    }

    pub fn proposal(&self) -> Option<&RenameProposal> {
        match self {
            RenameOutcome::Proposed(p) => Some(p),
            RenameOutcome::Skipped { .. } => None,
        }
    }
}

/// Result of a batch run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchReport {
    /// Report ID.
    pub id: String,
    /// Creation timestamp.
    pub created_at: String,
    /// One entry per request.
    pub results: Vec<BatchEntry>,
}

/// One batch result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchEntry {
    /// Source path of the request's file.
    pub source: String,
    /// What happened.
    pub outcome: RenameOutcome,
}

impl BatchReport {
    pub fn proposed_count(&self) -> usize {
        self.results
            .iter()
            .filter(|r| r.outcome.proposal().is_some())
            .count()
    }

    pub fn skipped_count(&self) -> usize {
        self.results.len() - self.proposed_count()
    }
}
