//! FFprobe service for reading stream languages.

use crate::models::media::StreamLanguages;
use crate::Result;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::process::Command;

/// FFprobe output format.
#[derive(Debug, Deserialize)]
struct FfprobeOutput {
    #[serde(default)]
    streams: Vec<FfprobeStream>,
}

/// FFprobe stream information.
#[derive(Debug, Deserialize)]
struct FfprobeStream {
    codec_type: Option<String>,
    #[serde(default)]
    tags: HashMap<String, String>,
}

impl FfprobeStream {
    fn language(&self) -> Option<String> {
        self.tags
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case("language"))
            .map(|(_, v)| v.trim().to_string())
            .filter(|v| !v.is_empty() && v != "und")
    }
}

/// Check if ffprobe is installed.
pub fn is_installed() -> bool {
    Command::new("ffprobe")
        .arg("-version")
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

/// Decode ffprobe JSON into audio and subtitle stream languages.
pub fn parse_stream_languages(json: &[u8]) -> Result<StreamLanguages> {
    let output: FfprobeOutput = serde_json::from_slice(json)?;

    let mut languages = StreamLanguages::default();
    for stream in &output.streams {
        match stream.codec_type.as_deref() {
            Some("audio") => languages.audio.push(stream.language()),
            Some("subtitle") => languages.text.push(stream.language()),
            _ => {}
        }
    }

    Ok(languages)
}

/// Read stream languages of a media file using ffprobe.
pub fn probe_streams(path: &Path) -> Result<StreamLanguages> {
    let output = Command::new("ffprobe")
        .args(["-v", "quiet", "-print_format", "json", "-show_streams"])
        .arg(path)
        .output()?;

    if !output.status.success() {
        return Err(crate::Error::other(format!(
            "ffprobe failed for: {:?}",
            path
        )));
    }

    parse_stream_languages(&output.stdout)
}
