//! Media directory scanner.
//!
//! Walks the media root once, builds the in-memory [`Library`], and pairs
//! each video with sidecar subtitles from the same folder.

use std::path::Path;

use tracing::warn;
use walkdir::WalkDir;

use crate::config::LibraryConfig;
use crate::error::EizouError;
use crate::models::{Library, MediaItem, ROOT_CATALOG};

/// Scan `root` and build the library.
///
/// Catalogs are named after the top-level folder a video lives under; videos
/// directly inside `root` go to [`ROOT_CATALOG`]. A subtitle belongs to a
/// video when its lowercased file name contains the video's lowercased stem.
pub fn scan_media_dir(root: &Path, config: &LibraryConfig) -> Result<Library, EizouError> {
    if !root.is_dir() {
        return Err(EizouError::Scan(format!(
            "media directory does not exist: {}",
            root.display()
        )));
    }

    tracing::info!(path = %root.display(), "Scanning media directory");

    let mut library = Library::new();
    for entry in WalkDir::new(root)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
    {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                warn!(error = %e, "Failed to read directory entry");
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        if !has_extension(path, &config.video_extensions) {
            continue;
        }

        let Some(rel_path) = relative_path(root, path) else {
            continue;
        };
        let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
            warn!(path = %path.display(), "Skipping non UTF-8 file name");
            continue;
        };

        let catalog = match rel_path.split_once('/') {
            Some((top, _)) => top.to_string(),
            None => ROOT_CATALOG.to_string(),
        };

        let mut item = MediaItem::new(rel_path, stem);
        item.subtitles = match path.parent() {
            Some(folder) => find_subtitles(root, folder, stem, &config.subtitle_extensions),
            None => Vec::new(),
        };

        tracing::debug!(
            id = %item.id,
            catalog = %catalog,
            subtitles = item.subtitles.len(),
            "Indexed media file"
        );
        if let Some(previous) = library.insert(&catalog, item) {
            warn!(
                id = %previous.id,
                replaced = %previous.rel_path,
                "Media id collision, keeping the later file"
            );
        }
    }

    tracing::info!(
        items = library.len(),
        catalogs = library.catalog_ids().count(),
        "Scan complete"
    );
    Ok(library)
}

/// Subtitle files in `folder` whose name contains `stem`, as sorted
/// root-relative paths.
fn find_subtitles(root: &Path, folder: &Path, stem: &str, extensions: &[String]) -> Vec<String> {
    let entries = match std::fs::read_dir(folder) {
        Ok(entries) => entries,
        Err(e) => {
            warn!(path = %folder.display(), error = %e, "Failed to list subtitle folder");
            return Vec::new();
        }
    };

    let stem = stem.to_lowercase();
    let mut subtitles: Vec<String> = entries
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().map(|t| !t.is_dir()).unwrap_or(false))
        .map(|e| e.path())
        .filter(|p| has_extension(p, extensions))
        .filter(|p| {
            p.file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|n| n.to_lowercase().contains(&stem))
        })
        .filter_map(|p| relative_path(root, &p))
        .collect();
    subtitles.sort();
    subtitles
}

fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .is_some_and(|e| extensions.iter().any(|x| x.eq_ignore_ascii_case(&e)))
}

/// `path` relative to `root`, with `/` separators.
fn relative_path(root: &Path, path: &Path) -> Option<String> {
    let rel = path.strip_prefix(root).ok()?;
    let parts: Option<Vec<&str>> = rel.components().map(|c| c.as_os_str().to_str()).collect();
    Some(parts?.join("/"))
}
