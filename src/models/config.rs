//! Configuration model.

use super::catalog::TitleKind;
use crate::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// How the regular episode kind is rendered in episode codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EpisodePrefix {
    /// `E007`
    Letter,
    /// `007`
    Bare,
}

/// Which evidence source wins when classifying languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LanguagePrecedence {
    /// Declared data only when both axes are populated, else streams for both.
    AllOrNothing,
    /// Each axis falls back to streams on its own.
    PerAxis,
}

/// One destination rule: any matching dub, sub or sticky hint selects the bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DestinationRule {
    /// Bucket folder name.
    pub bucket: String,
    /// Languages whose dub selects this bucket.
    #[serde(default)]
    pub dub: Vec<String>,
    /// Languages whose sub selects this bucket.
    #[serde(default)]
    pub sub: Vec<String>,
    /// Keep files already filed under `/{bucket}/`.
    #[serde(default = "default_true")]
    pub sticky: bool,
}

impl DestinationRule {
    pub fn new(bucket: &str, dub: &[&str], sub: &[&str]) -> Self {
        Self {
            bucket: bucket.to_string(),
            dub: dub.iter().map(|l| l.to_string()).collect(),
            sub: sub.iter().map(|l| l.to_string()).collect(),
            sticky: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Renamer configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenamerConfig {
    /// Ranked title languages.
    pub title_languages: Vec<String>,
    /// Wanted series title kind.
    pub title_kind: TitleKind,
    /// Episode prefix style.
    pub episode_prefix: EpisodePrefix,
    /// Maximum filename length before the extension, in characters.
    pub max_length: usize,
    /// Declared vs. stream language precedence.
    pub language_precedence: LanguagePrecedence,
    /// Refuse renames onto an existing file.
    pub fail_on_name_collision: bool,
    /// Prefix filenames with `[ReleaseGroup]`.
    pub release_group_prefix: bool,
    /// Prefix of every computed destination path.
    pub library_base: String,
    /// Folder for age-restricted series.
    pub restricted_folder: String,
    /// Folder for everything else.
    pub unrestricted_folder: String,
    /// Bucket used when no rule matches.
    pub fallback_bucket: String,
    /// Ordered destination rules, first match wins.
    pub rules: Vec<DestinationRule>,
}

impl Default for RenamerConfig {
    fn default() -> Self {
        Self {
            title_languages: vec!["de".to_string(), "en".to_string(), "x-jat".to_string()],
            title_kind: TitleKind::Official,
            episode_prefix: EpisodePrefix::Letter,
            max_length: 150,
            language_precedence: LanguagePrecedence::AllOrNothing,
            fail_on_name_collision: false,
            release_group_prefix: false,
            library_base: default_library_base().to_string(),
            restricted_folder: "Hentai".to_string(),
            unrestricted_folder: "Anime".to_string(),
            fallback_bucket: "_manual".to_string(),
            rules: vec![
                DestinationRule::new("GerDub", &["de"], &[]),
                DestinationRule::new("GerSub", &[], &["de"]),
                DestinationRule::new("Other", &["en"], &["en"]),
            ],
        }
    }
}

impl RenamerConfig {
    /// Languages any rule looks at, in first-mention order.
    pub fn target_languages(&self) -> Vec<String> {
        let mut languages: Vec<String> = Vec::new();
        for rule in &self.rules {
            for lang in rule.dub.iter().chain(rule.sub.iter()) {
                if !languages.iter().any(|l| l.eq_ignore_ascii_case(lang)) {
                    languages.push(lang.clone());
                }
            }
        }
        languages
    }

    /// Check values that would make every proposal meaningless.
    pub fn validate(&self) -> Result<()> {
        if self.max_length == 0 {
            return Err(crate::Error::ConfigError(
                "max_length must be greater than zero".to_string(),
            ));
        }
        if self.fallback_bucket.trim().is_empty() {
            return Err(crate::Error::ConfigError(
                "fallback_bucket must not be empty".to_string(),
            ));
        }
        if let Some(rule) = self.rules.iter().find(|r| r.bucket.trim().is_empty()) {
            return Err(crate::Error::ConfigError(format!(
                "destination rule with languages {:?}/{:?} has no bucket",
                rule.dub, rule.sub
            )));
        }
        Ok(())
    }
}

#[cfg(windows)]
fn default_library_base() -> &'static str {
    "Z:\\"
}

#[cfg(not(windows))]
fn default_library_base() -> &'static str {
    "/mnt/array/"
}

/// Get the configuration directory path.
fn dirs_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("series_renamer")
}

/// Default configuration file location.
pub fn default_config_path() -> PathBuf {
    dirs_config_path().join("config.toml")
}

/// Load configuration from the default location, falling back to defaults.
pub fn load_config() -> RenamerConfig {
    let config_path = default_config_path();

    if config_path.exists() {
        match load_config_from(&config_path) {
            Ok(config) => return config,
            Err(e) => tracing::warn!("Ignoring config {}: {}", config_path.display(), e),
        }
    }

    RenamerConfig::default()
}

/// Load configuration from an explicit file.
pub fn load_config_from(path: &Path) -> Result<RenamerConfig> {
    let content = std::fs::read_to_string(path)?;
    let config: RenamerConfig = toml::from_str(&content)?;
    config.validate()?;
    Ok(config)
}
