//! Content type and region detection on raw filenames.
//!
//! Both detectors run on the raw name, not the cleaned title: cleaning strips
//! the season markers and country names they look for.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::country::COUNTRIES;

/// Whether a file is a standalone movie or an episode of a series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Movie,
    Series,
}

impl ContentType {
    /// Label used by addon clients (`movie` / `series`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Movie => "movie",
            Self::Series => "series",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// ISO 3166-1 alpha-2 region code, e.g. `IN`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct RegionCode(&'static str);

impl RegionCode {
    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for RegionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Attributes inferred from a raw filename.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Attributes {
    pub content_type: ContentType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<RegionCode>,
}

/// "S01E02" or "Season 2" / "season2".
static RE_SERIES_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)S\d{1,2}E\d{1,2}|Season\s*\d+").unwrap());

/// Series if the name carries a season/episode marker, movie otherwise.
pub fn detect_type(raw: &str) -> ContentType {
    if RE_SERIES_MARKER.is_match(raw) {
        ContentType::Series
    } else {
        ContentType::Movie
    }
}

/// First country (in table order) whose name appears anywhere in `raw`.
///
/// This is a plain substring test, not a word match: `Indiana` yields `IN`,
/// and `Guinea-Bissau` yields `GN` because `Guinea` sorts first.
pub fn detect_region(raw: &str) -> Option<RegionCode> {
    let upper = raw.to_uppercase();
    COUNTRIES
        .iter()
        .find(|c| upper.contains(&c.name.to_uppercase()))
        .map(|c| RegionCode(c.alpha2))
}

/// Run both detectors.
pub fn detect(raw: &str) -> Attributes {
    Attributes {
        content_type: detect_type(raw),
        region: detect_region(raw),
    }
}
