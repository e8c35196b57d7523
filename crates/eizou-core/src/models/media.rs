use std::collections::{BTreeMap, HashMap};

use eizou_parse::{clean_title, detect_region, detect_type, ContentType, RegionCode};
use serde::{Deserialize, Serialize};

/// Catalog for video files that sit directly in the media root.
pub const ROOT_CATALOG: &str = "local";

/// A video file found in the media directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaItem {
    /// 7-digit id derived from `rel_path`, see [`media_id`].
    pub id: String,
    /// Raw file stem, extension removed.
    pub title: String,
    /// Path relative to the media root, `/`-separated.
    pub rel_path: String,
    /// Sidecar subtitles, relative to the media root.
    pub subtitles: Vec<String>,
}

impl MediaItem {
    pub fn new(rel_path: impl Into<String>, title: impl Into<String>) -> Self {
        let rel_path = rel_path.into();
        Self {
            id: media_id(&rel_path),
            title: title.into(),
            rel_path,
            subtitles: Vec::new(),
        }
    }

    /// Cleaned title for display and search.
    pub fn display_title(&self) -> String {
        clean_title(&self.title)
    }

    pub fn content_type(&self) -> ContentType {
        detect_type(&self.title)
    }

    pub fn region(&self) -> Option<RegionCode> {
        detect_region(&self.title)
    }
}

/// Stable id for a relative path: first four MD5 bytes as a big-endian
/// integer, modulo 9 999 999, zero-padded to seven digits.
pub fn media_id(rel_path: &str) -> String {
    let digest = md5::compute(rel_path.as_bytes());
    let n = u32::from_be_bytes([digest[0], digest[1], digest[2], digest[3]]) % 9_999_999;
    format!("{n:07}")
}

/// In-memory library: catalogs keep scan order, items are indexed by id.
#[derive(Debug, Clone, Default)]
pub struct Library {
    catalogs: BTreeMap<String, Vec<String>>,
    items: HashMap<String, MediaItem>,
}

impl Library {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an item to `catalog`. If another item already has the same id it
    /// is replaced and returned.
    pub fn insert(&mut self, catalog: &str, item: MediaItem) -> Option<MediaItem> {
        let previous = self.items.remove(&item.id);
        if previous.is_some() {
            for ids in self.catalogs.values_mut() {
                ids.retain(|id| id != &item.id);
            }
        }
        self.catalogs
            .entry(catalog.to_string())
            .or_default()
            .push(item.id.clone());
        self.items.insert(item.id.clone(), item);
        previous
    }

    pub fn item(&self, id: &str) -> Option<&MediaItem> {
        self.items.get(id)
    }

    /// Items of one catalog in scan order, or `None` for an unknown catalog.
    pub fn catalog(&self, name: &str) -> Option<Vec<&MediaItem>> {
        let ids = self.catalogs.get(name)?;
        Some(ids.iter().filter_map(|id| self.items.get(id)).collect())
    }

    /// Catalog names, sorted.
    pub fn catalog_ids(&self) -> impl Iterator<Item = &str> {
        self.catalogs.keys().map(String::as_str)
    }

    pub fn items(&self) -> impl Iterator<Item = &MediaItem> {
        self.items.values()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
