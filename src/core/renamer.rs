//! Rename pipeline.
//!
//! Turns one [`RenameRequest`] into a filename and destination proposal:
//! - resolve series and episode titles
//! - format the episode code
//! - build the sanitized filename
//! - classify languages and pick the destination bucket
//! - optionally refuse names that already exist

use crate::core::destination::DestinationResolver;
use crate::core::episode::EpisodeNumberFormatter;
use crate::core::languages::LanguageClassifier;
use crate::core::title::{resolve_episode_title, resolve_series_title};
use crate::generators::filename::{build_filename, FilenameParts};
use crate::models::config::RenamerConfig;
use crate::models::proposal::{RenameOutcome, RenameProposal, RenameRequest};
use crate::utils::fs::ExistenceProbe;
use crate::Result;
use std::path::PathBuf;

/// Proposes filenames and destinations.
#[derive(Debug, Clone, Default)]
pub struct Renamer {
    config: RenamerConfig,
}

impl Renamer {
    /// Create a renamer with the given configuration.
    pub fn new(config: RenamerConfig) -> Self {
        Self { config }
    }

    /// Propose a filename and destination for one file.
    pub fn propose(
        &self,
        request: &RenameRequest,
        probe: &dyn ExistenceProbe,
    ) -> Result<RenameProposal> {
        let source = request.file.path.display().to_string();

        let series = request
            .series
            .as_ref()
            .ok_or_else(|| crate::Error::NotLinked(source.clone()))?;
        if request.episodes.is_empty() {
            return Err(crate::Error::NotLinked(source));
        }

        let preference = &self.config.title_languages;
        let series_title = resolve_series_title(
            &series.titles,
            self.config.title_kind,
            preference,
            &series.preferred_title,
        );

        let episode_code = EpisodeNumberFormatter::new(
            &series.episode_counters,
            self.config.episode_prefix,
        )
        .format_group(&request.episodes)?;

        let episode_titles = request
            .episodes
            .iter()
            .map(|ep| {
                resolve_episode_title(&ep.titles, preference).ok_or(
                    crate::Error::AmbiguousEpisodeTitle {
                        kind: ep.kind,
                        number: ep.number,
                    },
                )
            })
            .collect::<Result<Vec<_>>>()?;

        let extension = request.file.extension();
        let parts = FilenameParts {
            series_title,
            episode_code: &episode_code,
            episode_titles,
            is_movie: series.is_movie(),
            release_group: if self.config.release_group_prefix {
                request.file.release_group.as_deref()
            } else {
                None
            },
            extension: extension.as_deref(),
        };
        let filename = build_filename(&parts, self.config.max_length)?;

        let targets = self.config.target_languages();
        let languages = LanguageClassifier::new(self.config.language_precedence).classify(
            request.declared.as_ref(),
            request.file.streams.as_ref(),
            targets.as_slice(),
        );

        let current_path = request.file.path.to_string_lossy();
        let destination = DestinationResolver::new(&self.config).resolve(
            series.restricted,
            &languages,
            Some(&*current_path),
            &request.roots,
            series_title,
        );

        if self.config.fail_on_name_collision {
            let target = match &destination.root {
                Some(root) => PathBuf::from(&root.location)
                    .join(&destination.sub_path)
                    .join(&filename),
                None => request
                    .file
                    .path
                    .parent()
                    .map(|p| p.join(&filename))
                    .unwrap_or_else(|| PathBuf::from(&filename)),
            };
            if target != request.file.path && probe.exists(&target) {
                return Err(crate::Error::NameCollision(target.display().to_string()));
            }
        }

        tracing::info!("Filename: {}", filename);
        tracing::info!(
            "Destination: {} / {}",
            destination
                .root
                .as_ref()
                .map(|r| r.location.as_str())
                .unwrap_or("<none>"),
            destination.sub_path
        );

        Ok(RenameProposal {
            filename,
            destination,
            languages,
        })
    }

    /// Like [`Renamer::propose`], but folds failures into a readable reason.
    pub fn outcome(&self, request: &RenameRequest, probe: &dyn ExistenceProbe) -> RenameOutcome {
        match self.propose(request, probe) {
            Ok(proposal) => RenameOutcome::Proposed(proposal),
            Err(e) => {
                tracing::warn!("Skipping {}: {}", request.file.path.display(), e);
                RenameOutcome::Skipped {
                    reason: e.to_string(),
                }
            }
        }
    }
}
