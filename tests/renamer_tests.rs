//! Integration tests for the rename pipeline.
//!
//! Tests cover:
//! - End-to-end filename and destination proposals
//! - Title preference ordering
//! - Language precedence between declared and stream data
//! - Bucket priority and sticky path hints
//! - Filename length and extension guarantees

use series_renamer::core::languages::LanguageClassifier;
use series_renamer::core::renamer::Renamer;
use series_renamer::core::title::resolve_series_title;
use series_renamer::generators::filename::{build_filename, build_stem, FilenameParts};
use series_renamer::models::catalog::{
    CatalogEpisode, CatalogSeries, CatalogTitle, EpisodeKind, EpisodeTitle, MediaKind, TitleKind,
};
use series_renamer::models::config::{LanguagePrecedence, RenamerConfig};
use series_renamer::models::media::{
    DeclaredLanguageInfo, MediaFile, StorageRoot, StreamLanguages,
};
use series_renamer::models::proposal::{RenameOutcome, RenameRequest};
use series_renamer::utils::fs::NoProbe;
use series_renamer::utils::sanitize::sanitize_filename;

fn config() -> RenamerConfig {
    RenamerConfig {
        title_languages: vec!["de".to_string(), "en".to_string()],
        library_base: "/mnt/array/".to_string(),
        ..Default::default()
    }
}

fn roots() -> Vec<StorageRoot> {
    ["GerDub", "GerSub", "Other", "_manual"]
        .iter()
        .flat_map(|bucket| {
            vec![
                StorageRoot::new(&format!("/mnt/array/Anime/{}", bucket)),
                StorageRoot::new(&format!("/mnt/array/Hentai/{}", bucket)),
            ]
        })
        .collect()
}

fn kekkai_sensen() -> CatalogSeries {
    CatalogSeries {
        preferred_title: "Kekkai Sensen".to_string(),
        media_kind: MediaKind::Normal,
        restricted: false,
        episode_counters: [(EpisodeKind::Episode, 12), (EpisodeKind::Special, 12)]
            .into_iter()
            .collect(),
        titles: vec![
            CatalogTitle::new("x-jat", TitleKind::Official, "Kekkai Sensen"),
            CatalogTitle::new("en", TitleKind::Synonym, "Blood Blockade Battlefront"),
        ],
    }
}

fn special_request(streams: StreamLanguages) -> RenameRequest {
    RenameRequest {
        file: MediaFile::new("/incoming/[Grp] Kekkai Sensen - SP3.mkv").with_streams(streams),
        series: Some(kekkai_sensen()),
        episodes: vec![CatalogEpisode {
            kind: EpisodeKind::Special,
            number: 3,
            titles: vec![EpisodeTitle::new("en", "Bonus")],
        }],
        declared: None,
        roots: roots(),
    }
}

// ========== END-TO-END TESTS ==========

#[test]
fn test_end_to_end_special_with_german_dub() {
    let renamer = Renamer::new(config());
    let request = special_request(StreamLanguages::new(["de", "ja"], ["en"]));

    let proposal = renamer.propose(&request, &NoProbe).unwrap();

    assert_eq!(proposal.filename, "Kekkai Sensen - S03 - Bonus.mkv");
    assert_eq!(proposal.destination.bucket, "GerDub");
    assert_eq!(
        proposal.destination.root,
        Some(StorageRoot::new("/mnt/array/Anime/GerDub"))
    );
    assert_eq!(proposal.destination.sub_path, "Kekkai Sensen");
    assert!(proposal.languages["de"].has_dub);
    assert!(proposal.languages["en"].has_sub);
}

#[test]
fn test_end_to_end_multi_episode_range() {
    let mut series = kekkai_sensen();
    series.episode_counters.insert(EpisodeKind::Episode, 100);
    let request = RenameRequest {
        file: MediaFile::new("/incoming/ep07-09.MKV"),
        series: Some(series),
        episodes: (7..=9)
            .map(|n| CatalogEpisode {
                kind: EpisodeKind::Episode,
                number: n,
                titles: vec![
                    EpisodeTitle::new("ja", &format!("第{}話", n)),
                    EpisodeTitle::new("de", &format!("Folge {}", n)),
                ],
            })
            .collect(),
        ..Default::default()
    };

    let proposal = Renamer::new(config()).propose(&request, &NoProbe).unwrap();

    assert_eq!(
        proposal.filename,
        "Kekkai Sensen - E007-E009 - Folge 7⁄Folge 8⁄Folge 9.MKV"
    );
    assert_eq!(proposal.destination.bucket, "_manual");
    assert!(!proposal.destination.is_configured());
}

#[test]
fn test_restricted_movie() {
    let series = CatalogSeries {
        preferred_title: "Some Movie?".to_string(),
        media_kind: MediaKind::Movie,
        restricted: true,
        ..Default::default()
    };
    let request = RenameRequest {
        file: MediaFile::new("/incoming/movie.avi")
            .with_streams(StreamLanguages::new(["eng"], Vec::<String>::new())),
        series: Some(series),
        episodes: vec![CatalogEpisode {
            kind: EpisodeKind::Episode,
            number: 1,
            titles: vec![EpisodeTitle::new("en", "Complete Movie")],
        }],
        roots: roots(),
        ..Default::default()
    };

    let proposal = Renamer::new(config()).propose(&request, &NoProbe).unwrap();

    assert_eq!(proposal.filename, "Some Movie？ - Complete Movie.avi");
    assert_eq!(
        proposal.destination.root,
        Some(StorageRoot::new("/mnt/array/Hentai/Other"))
    );
    assert_eq!(proposal.destination.sub_path, "Some Movie？");
}

#[test]
fn test_unlinked_file_is_skipped_with_message() {
    let mut request = special_request(StreamLanguages::default());
    request.episodes.clear();

    let outcome = Renamer::new(config()).outcome(&request, &NoProbe);
    match outcome {
        RenameOutcome::Skipped { reason } => assert!(reason.contains("not linked")),
        other => panic!("Expected Skipped, got {:?}", other),
    }
}

// ========== TITLE PREFERENCE TESTS ==========

#[test]
fn test_series_title_follows_preference_rank() {
    let titles = vec![
        CatalogTitle::new("x-jat", TitleKind::Official, "Romaji"),
        CatalogTitle::new("en", TitleKind::Official, "English"),
        CatalogTitle::new("de", TitleKind::Official, "Deutsch"),
    ];

    let cases: &[(&[&str], &str)] = &[
        (&["de", "en", "x-jat"], "Deutsch"),
        (&["en", "de"], "English"),
        (&["fr", "x-jat", "en"], "Romaji"),
        (&["fr", "it"], "Fallback"),
        (&[], "Fallback"),
    ];

    for (order, expected) in cases {
        let order: Vec<String> = order.iter().map(|l| l.to_string()).collect();
        assert_eq!(
            resolve_series_title(&titles, TitleKind::Official, &order, "Fallback"),
            *expected,
            "order: {:?}",
            order
        );
    }
}

// ========== LANGUAGE PRECEDENCE TESTS ==========

#[test]
fn test_complete_declared_data_overrides_streams() {
    let declared = DeclaredLanguageInfo::new(["ja"], ["en"]);
    let streams = StreamLanguages::new(["de"], ["de"]);

    let flags = LanguageClassifier::default().classify(
        Some(&declared),
        Some(&streams),
        &["de", "en"],
    );

    assert!(!flags["de"].has_dub);
    assert!(!flags["de"].has_sub);
    assert!(flags["en"].has_sub);
}

#[test]
fn test_declared_data_with_empty_axis_defers_to_streams() {
    let declared = DeclaredLanguageInfo::new(["de"], Vec::<String>::new());
    let streams = StreamLanguages::new(["ja"], ["en"]);

    let flags = LanguageClassifier::default().classify(
        Some(&declared),
        Some(&streams),
        &["de", "en"],
    );

    assert!(!flags["de"].has_dub);
    assert!(flags["en"].has_sub);
}

#[test]
fn test_declared_data_missing_axis_defers_to_streams() {
    let declared = DeclaredLanguageInfo {
        audio: Some(vec!["de".to_string()]),
        subs: None,
    };
    let streams = StreamLanguages::new(["ger"], Vec::<String>::new());

    let flags = LanguageClassifier::new(LanguagePrecedence::AllOrNothing).classify(
        Some(&declared),
        Some(&streams),
        &["de"],
    );

    assert!(flags["de"].has_dub);
}

#[test]
fn test_declared_languages_drive_destination() {
    let mut request = special_request(StreamLanguages::new(["de"], ["de"]));
    request.declared = Some(DeclaredLanguageInfo::new(["ja"], ["en"]));

    let proposal = Renamer::new(config()).propose(&request, &NoProbe).unwrap();

    assert_eq!(proposal.destination.bucket, "Other");
}

// ========== BUCKET PRIORITY TESTS ==========

#[test]
fn test_german_dub_and_english_sub_goes_to_gerdub() {
    let request = special_request(StreamLanguages::new(["de"], ["en"]));
    let proposal = Renamer::new(config()).propose(&request, &NoProbe).unwrap();
    assert_eq!(proposal.destination.bucket, "GerDub");
}

#[test]
fn test_sticky_gersub_without_evidence() {
    let mut request = special_request(StreamLanguages::default());
    request.file.path = "/mnt/array/Anime/GerSub/Kekkai Sensen/old name.mkv".into();

    let proposal = Renamer::new(config()).propose(&request, &NoProbe).unwrap();

    assert_eq!(proposal.destination.bucket, "GerSub");
    assert_eq!(
        proposal.destination.root,
        Some(StorageRoot::new("/mnt/array/Anime/GerSub"))
    );
}

#[test]
fn test_unavailable_streams_route_to_manual() {
    let mut request = special_request(StreamLanguages::default());
    request.file.streams = None;

    let proposal = Renamer::new(config()).propose(&request, &NoProbe).unwrap();

    assert_eq!(proposal.destination.bucket, "_manual");
    assert!(proposal.languages.values().all(|f| !f.has_dub && !f.has_sub));
}

// ========== FILENAME GUARANTEE TESTS ==========

#[test]
fn test_stem_length_bound() {
    let long_title = "Ein sehr langer Episodentitel: ".repeat(10);
    let long_japanese = "二千年後の君へ...".repeat(20);
    let inputs = [
        ("Short", long_title.as_str()),
        ("進撃の巨人 The Final Season", long_japanese.as_str()),
        ("A/B\\C", "x"),
    ];

    for max_length in [1, 5, 20, 100, 150, 225] {
        for (series, episode) in &inputs {
            let parts = FilenameParts {
                series_title: *series,
                episode_code: "E0001",
                episode_titles: vec![*episode],
                extension: Some("mkv"),
                ..Default::default()
            };
            let stem = build_stem(&parts, max_length).unwrap();
            assert!(
                stem.chars().count() <= max_length,
                "{} > {}",
                stem,
                max_length
            );
        }
    }
}

#[test]
fn test_extension_round_trip() {
    for ext in ["mkv", "MP4", "Avi"] {
        let parts = FilenameParts {
            series_title: "Show",
            episode_code: "E01",
            episode_titles: vec!["Title"],
            extension: Some(ext),
            ..Default::default()
        };
        let name = build_filename(&parts, 150).unwrap();
        let stem = name.strip_suffix(&format!(".{}", ext)).unwrap();
        assert_eq!(format!("{}.{}", stem, ext), name);
        assert_eq!(stem, build_stem(&parts, 150).unwrap());
    }
}

#[test]
fn test_no_illegal_characters_survive() {
    let parts = FilenameParts {
        series_title: r#".Hack//Sign: "Roots""#,
        episode_code: "E01",
        episode_titles: vec!["Who? <Me> | *You*...", "A\\B"],
        extension: Some("mkv"),
        ..Default::default()
    };
    let stem = build_stem(&parts, 150).unwrap();

    for c in ['*', '|', '\\', '/', ':', '"', '>', '<', '?'] {
        assert!(!stem.contains(c), "{:?} survived in {}", c, stem);
    }
    assert!(!stem.starts_with('.'));
    assert!(!stem.contains("..."));
    assert_eq!(sanitize_filename(&stem), stem);
}
