//! Folder name generator.

use crate::models::config::RenamerConfig;
use crate::utils::sanitize::sanitize_filename;

/// Generate the series folder below a storage root.
pub fn series_folder(series_title: &str) -> String {
    sanitize_filename(series_title)
}

/// Separator matching the style of `base`.
fn separator(base: &str) -> char {
    if base.contains('\\') && !base.contains('/') {
        '\\'
    } else {
        '/'
    }
}

/// Generate the bucket path that is looked up among the storage roots.
///
/// Format: `${libraryBase}${Hentai|Anime}${sep}${bucket}`
pub fn bucket_path(config: &RenamerConfig, restricted: bool, bucket: &str) -> String {
    let base = &config.library_base;
    let sep = separator(base);

    let mut path = base.clone();
    if !path.is_empty() && !path.ends_with(sep) {
        path.push(sep);
    }
    path.push_str(if restricted {
        &config.restricted_folder
    } else {
        &config.unrestricted_folder
    });
    path.push(sep);
    path.push_str(bucket);
    path
}
