//! Addon wire types (manifest, catalog, meta, stream, subtitles).

use eizou_core::models::MediaItem;
use eizou_core::placeholder::Placeholders;
use serde::Serialize;

pub const ADDON_ID: &str = "stremio-local";
pub const ADDON_NAME: &str = "Local Media";
/// Every item is published under this type, series episodes included.
pub const ITEM_TYPE: &str = "movie";
pub const RESOURCES: &[&str] = &["catalog", "meta", "stream", "subtitles"];

const DESCRIPTION: &str = "Local movie served via Stremio addon";
const GENRE: &str = "Local";

#[derive(Debug, Serialize)]
pub struct Manifest {
    pub id: &'static str,
    pub version: &'static str,
    pub name: &'static str,
    pub resources: &'static [&'static str],
    pub types: [&'static str; 1],
    pub catalogs: Vec<ManifestCatalog>,
}

impl Manifest {
    pub fn new<'a>(catalog_ids: impl Iterator<Item = &'a str>) -> Self {
        Self {
            id: ADDON_ID,
            version: env!("CARGO_PKG_VERSION"),
            name: ADDON_NAME,
            resources: RESOURCES,
            types: [ITEM_TYPE],
            catalogs: catalog_ids.map(ManifestCatalog::new).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ManifestCatalog {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub id: String,
    pub name: String,
    pub extra: [CatalogExtra; 1],
}

impl ManifestCatalog {
    fn new(id: &str) -> Self {
        Self {
            kind: ITEM_TYPE,
            id: id.to_string(),
            name: id.to_string(),
            extra: [CatalogExtra {
                name: "search",
                is_required: false,
            }],
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogExtra {
    pub name: &'static str,
    pub is_required: bool,
}

#[derive(Debug, Serialize)]
pub struct CatalogResponse {
    pub metas: Vec<MetaPreview>,
}

#[derive(Debug, Serialize)]
pub struct MetaPreview {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub name: String,
    pub poster: String,
}

impl MetaPreview {
    pub fn new(item: &MediaItem, placeholders: &Placeholders) -> Self {
        let name = item.display_title();
        Self {
            id: item.id.clone(),
            kind: ITEM_TYPE,
            poster: placeholders.poster(&name),
            name,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MetaResponse {
    pub meta: Option<MetaDetail>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetaDetail {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub name: String,
    pub poster: String,
    pub background: String,
    pub description: &'static str,
    pub genres: [&'static str; 1],
    /// `movie` or `series`, as detected from the file name.
    pub content_type: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<&'static str>,
}

impl MetaDetail {
    pub fn new(item: &MediaItem, placeholders: &Placeholders, background: String) -> Self {
        let name = item.display_title();
        Self {
            id: item.id.clone(),
            kind: ITEM_TYPE,
            poster: placeholders.poster(&name),
            name,
            background,
            description: DESCRIPTION,
            genres: [GENRE],
            content_type: item.content_type().as_str(),
            region: item.region().map(|r| r.as_str()),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct StreamResponse {
    pub streams: Vec<Stream>,
}

#[derive(Debug, Serialize)]
pub struct Stream {
    pub title: String,
    pub url: String,
}

#[derive(Debug, Serialize)]
pub struct SubtitlesResponse {
    pub subtitles: Vec<Subtitle>,
}

#[derive(Debug, Serialize)]
pub struct Subtitle {
    pub id: String,
    pub url: String,
    pub lang: &'static str,
}

impl Subtitle {
    /// `rel_path` is the subtitle's path under the media root.
    pub fn new(rel_path: &str, url: String) -> Self {
        let file_name = rel_path.rsplit('/').next().unwrap_or(rel_path);
        let id = match file_name.rsplit_once('.') {
            Some((stem, _)) => stem,
            None => file_name,
        };
        Self {
            id: id.to_string(),
            url,
            lang: eizou_parse::language::subtitle_language(file_name),
        }
    }
}
