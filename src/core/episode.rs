//! Episode code formatting.

use crate::models::catalog::{CatalogEpisode, EpisodeCounters, EpisodeKind};
use crate::models::config::EpisodePrefix;
use crate::Result;

/// Formats zero-padded, kind-prefixed episode codes (`E007`, `S03`, `E007-E009`).
#[derive(Debug, Clone, Copy)]
pub struct EpisodeNumberFormatter<'a> {
    counters: &'a EpisodeCounters,
    prefix: EpisodePrefix,
}

impl<'a> EpisodeNumberFormatter<'a> {
    pub fn new(counters: &'a EpisodeCounters, prefix: EpisodePrefix) -> Self {
        Self { counters, prefix }
    }

    /// Digits needed for the highest number of `kind`; 1 when unknown.
    pub fn width(&self, kind: EpisodeKind) -> usize {
        self.counters
            .get(&kind)
            .map(|max| max.to_string().len())
            .unwrap_or(1)
    }

    fn prefix(&self, kind: EpisodeKind) -> &'static str {
        match (kind, self.prefix) {
            (EpisodeKind::Episode, EpisodePrefix::Bare) => "",
            _ => kind.prefix(),
        }
    }

    /// Code for a single episode.
    pub fn format(&self, kind: EpisodeKind, number: u32) -> String {
        format!(
            "{}{:0width$}",
            self.prefix(kind),
            number,
            width = self.width(kind)
        )
    }

    /// Code for an episode group: single code for one episode, a
    /// `first-last` range otherwise.
    ///
    /// The group is taken as supplied; only same-kind groups are accepted.
    pub fn format_group(&self, episodes: &[CatalogEpisode]) -> Result<String> {
        let (first, last) = match (episodes.first(), episodes.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => {
                return Err(crate::Error::NameGeneration(
                    "no episodes to number".to_string(),
                ))
            }
        };

        if episodes.iter().any(|e| e.kind != first.kind) {
            return Err(crate::Error::MixedEpisodeGroup);
        }

        if episodes.len() == 1 {
            return Ok(self.format(first.kind, first.number));
        }

        Ok(format!(
            "{}-{}",
            self.format(first.kind, first.number),
            self.format(last.kind, last.number)
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counters(entries: &[(EpisodeKind, u32)]) -> EpisodeCounters {
        entries.iter().copied().collect()
    }

    fn episode(kind: EpisodeKind, number: u32) -> CatalogEpisode {
        CatalogEpisode {
            kind,
            number,
            titles: vec![],
        }
    }

    #[test]
    fn test_format_padding() {
        let c = counters(&[(EpisodeKind::Episode, 100), (EpisodeKind::Special, 12)]);
        let f = EpisodeNumberFormatter::new(&c, EpisodePrefix::Letter);
        assert_eq!(f.format(EpisodeKind::Episode, 7), "E007");
        assert_eq!(f.format(EpisodeKind::Special, 3), "S03");
    }

    #[test]
    fn test_missing_counter_defaults_to_width_one() {
        let c = counters(&[]);
        let f = EpisodeNumberFormatter::new(&c, EpisodePrefix::Letter);
        assert_eq!(f.format(EpisodeKind::Trailer, 4), "T4");
        assert_eq!(f.format(EpisodeKind::Parody, 12), "P12");
    }

    #[test]
    fn test_all_prefixes() {
        let c = counters(&[]);
        let f = EpisodeNumberFormatter::new(&c, EpisodePrefix::Letter);
        let codes: Vec<String> = [
            EpisodeKind::Episode,
            EpisodeKind::Credits,
            EpisodeKind::Special,
            EpisodeKind::Trailer,
            EpisodeKind::Parody,
            EpisodeKind::Other,
        ]
        .iter()
        .map(|k| f.format(*k, 1))
        .collect();
        assert_eq!(codes, vec!["E1", "C1", "S1", "T1", "P1", "O1"]);
    }

    #[test]
    fn test_bare_prefix_only_affects_regular_episodes() {
        let c = counters(&[(EpisodeKind::Episode, 24), (EpisodeKind::Credits, 3)]);
        let f = EpisodeNumberFormatter::new(&c, EpisodePrefix::Bare);
        assert_eq!(f.format(EpisodeKind::Episode, 5), "05");
        assert_eq!(f.format(EpisodeKind::Credits, 2), "C2");
    }

    #[test]
    fn test_format_range() {
        let c = counters(&[(EpisodeKind::Episode, 100)]);
        let f = EpisodeNumberFormatter::new(&c, EpisodePrefix::Letter);
        let group = vec![
            episode(EpisodeKind::Episode, 7),
            episode(EpisodeKind::Episode, 8),
            episode(EpisodeKind::Episode, 9),
        ];
        assert_eq!(f.format_group(&group).unwrap(), "E007-E009");
        assert_eq!(f.format_group(&group[..1]).unwrap(), "E007");
    }

    #[test]
    fn test_mixed_group_rejected() {
        let c = counters(&[]);
        let f = EpisodeNumberFormatter::new(&c, EpisodePrefix::Letter);
        let group = vec![
            episode(EpisodeKind::Episode, 1),
            episode(EpisodeKind::Special, 2),
        ];
        assert!(matches!(
            f.format_group(&group),
            Err(crate::Error::MixedEpisodeGroup)
        ));
    }
}
