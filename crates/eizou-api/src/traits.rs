//! Trait definitions for artwork search services.
//!
//! The artwork resolver only talks to this trait, so it can be driven by the
//! TMDB client in production and by a stub in tests.

use std::fmt;
use std::future::Future;

use serde::{Deserialize, Serialize};

/// A service that can find images for a free-text title query.
pub trait ArtworkSearch: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Search within `scope`. An empty `Vec` means the service found nothing.
    fn search(
        &self,
        scope: SearchScope,
        query: &str,
    ) -> impl Future<Output = Result<Vec<SearchHit>, Self::Error>> + Send;
}

/// Which catalogue to search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchScope {
    Movie,
    Tv,
    /// Movies and TV together.
    Multi,
}

impl SearchScope {
    /// URL path segment for the search endpoint.
    pub fn as_path(self) -> &'static str {
        match self {
            Self::Movie => "movie",
            Self::Tv => "tv",
            Self::Multi => "multi",
        }
    }
}

impl fmt::Display for SearchScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_path())
    }
}

/// One search result, with image paths already expanded to full URLs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHit {
    pub name: Option<String>,
    pub backdrop_url: Option<String>,
    pub poster_url: Option<String>,
}

impl SearchHit {
    /// Backdrop if present, else poster.
    pub fn image_url(&self) -> Option<&str> {
        self.backdrop_url
            .as_deref()
            .or(self.poster_url.as_deref())
    }
}
