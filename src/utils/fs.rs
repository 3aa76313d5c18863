//! File system path helpers.
//!
//! Nothing here touches the disk except [`FsProbe`].

use std::path::Path;

/// Get the file extension exactly as written (case preserved).
pub fn get_extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .filter(|e| !e.is_empty())
        .map(|e| e.to_string())
}

/// Check if `path` contains `/{segment}/`, accepting either separator.
pub fn has_segment(path: &str, segment: &str) -> bool {
    if segment.is_empty() {
        return false;
    }
    let normalized = path.replace('\\', "/");
    normalized.contains(&format!("/{}/", segment))
}

/// Answers whether a target path is already taken.
pub trait ExistenceProbe {
    fn exists(&self, path: &Path) -> bool;
}

/// Probe backed by the real file system.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsProbe;

impl ExistenceProbe for FsProbe {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

/// Probe that never reports a collision.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProbe;

impl ExistenceProbe for NoProbe {
    fn exists(&self, _path: &Path) -> bool {
        false
    }
}
