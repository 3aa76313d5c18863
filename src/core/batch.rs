//! Request loading and batch proposals.
//!
//! Requests are JSON documents shaped like [`RenameRequest`]. A batch is
//! either a manifest holding an array of requests or a directory tree of
//! single-request files.

use crate::core::renamer::Renamer;
use crate::models::proposal::{BatchEntry, BatchReport, RenameRequest};
use crate::services::ffprobe;
use crate::utils::fs::ExistenceProbe;
use crate::Result;
use chrono::Utc;
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use uuid::Uuid;
use walkdir::WalkDir;

/// Load a single request from a JSON file.
pub fn load_request(path: &Path) -> Result<RenameRequest> {
    let content = fs::read_to_string(path)?;
    let request: RenameRequest = serde_json::from_str(&content).map_err(|e| {
        crate::Error::InvalidRequest(format!("{}: {}", path.display(), e))
    })?;
    Ok(request)
}

/// Load requests from a manifest file or a directory of request files.
///
/// Directory entries are visited in file name order.
pub fn load_requests(path: &Path) -> Result<Vec<RenameRequest>> {
    if !path.exists() {
        return Err(crate::Error::InvalidRequest(format!(
            "path not found: {}",
            path.display()
        )));
    }

    if path.is_file() {
        let content = fs::read_to_string(path)?;
        let requests: Vec<RenameRequest> = serde_json::from_str(&content).map_err(|e| {
            crate::Error::InvalidRequest(format!("{}: {}", path.display(), e))
        })?;
        return Ok(requests);
    }

    let mut requests = Vec::new();
    for entry in WalkDir::new(path)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let entry_path = entry.path();
        let is_json = entry_path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.eq_ignore_ascii_case("json"))
            .unwrap_or(false);
        if !entry.file_type().is_file() || !is_json {
            continue;
        }

        match load_request(entry_path) {
            Ok(request) => requests.push(request),
            Err(e) => tracing::warn!("Skipping request {}: {}", entry_path.display(), e),
        }
    }

    tracing::info!("Loaded {} requests from {}", requests.len(), path.display());
    Ok(requests)
}

/// Fill in stream languages with ffprobe when the request has none.
///
/// Probe failures leave the streams unknown.
pub fn fill_streams(request: &mut RenameRequest) {
    if request.file.streams.is_some() {
        return;
    }

    match ffprobe::probe_streams(&request.file.path) {
        Ok(streams) => {
            tracing::debug!(
                "Probed {}: {} audio, {} subtitle streams",
                request.file.path.display(),
                streams.audio.len(),
                streams.text.len()
            );
            request.file.streams = Some(streams);
        }
        Err(e) => {
            tracing::warn!(
                "Stream languages unavailable for {}: {}",
                request.file.path.display(),
                e
            );
        }
    }
}

/// Propose names for every request.
pub fn run_batch(
    renamer: &Renamer,
    mut requests: Vec<RenameRequest>,
    probe: &dyn ExistenceProbe,
    probe_streams: bool,
) -> Result<BatchReport> {
    let pb = ProgressBar::new(requests.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .map_err(|e| crate::Error::other(e.to_string()))?
            .progress_chars("=>-"),
    );

    let mut results = Vec::with_capacity(requests.len());
    for request in &mut requests {
        let source = request.file.path.display().to_string();
        pb.set_message(
            request
                .file
                .path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default(),
        );

        if probe_streams {
            fill_streams(request);
        }

        results.push(BatchEntry {
            source,
            outcome: renamer.outcome(request, probe),
        });
        pb.inc(1);
    }
    pb.finish_and_clear();

    Ok(BatchReport {
        id: Uuid::new_v4().to_string(),
        created_at: Utc::now().to_rfc3339(),
        results,
    })
}

/// Save a batch report to a JSON file.
pub fn save_report(report: &BatchReport, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(report)?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut file = fs::File::create(path)?;
    file.write_all(json.as_bytes())?;

    tracing::info!("Report saved to {:?}", path);
    Ok(())
}

/// Load a batch report from a JSON file.
pub fn load_report(path: &Path) -> Result<BatchReport> {
    let content = fs::read_to_string(path)?;
    let report: BatchReport = serde_json::from_str(&content)?;
    Ok(report)
}

/// Default report path next to the batch input.
pub fn default_report_path(input: &Path) -> PathBuf {
    let filename = format!("rename_report_{}.json", Utc::now().format("%Y%m%d_%H%M%S"));
    let base_dir = if input.is_dir() {
        input
    } else {
        input.parent().unwrap_or_else(|| Path::new("."))
    };
    base_dir.join(filename)
}
