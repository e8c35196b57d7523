//! Artwork resolution: raw filename → image URL.
//!
//! Flow: clean title → cache → type-scoped search (with region) → multi
//! search (plain title) → placeholder. Every outcome is cached under the
//! cleaned title, so release variants of one title resolve once.

use eizou_api::{ArtworkSearch, SearchScope};
use eizou_parse::{clean_title, detect, ContentType, RegionCode};
use futures::stream::{self, StreamExt};

use crate::cache::SharedCache;
use crate::placeholder::Placeholders;

/// Where a resolved URL came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtworkSource {
    Cached,
    /// Movie or TV search, depending on the detected content type.
    Scoped,
    Multi,
    Placeholder,
}

/// A resolved image together with the title it was resolved for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artwork {
    pub title: String,
    pub url: String,
    pub source: ArtworkSource,
}

/// Resolves background artwork for raw filenames against a search service.
pub struct ArtworkResolver<S> {
    search: S,
    cache: SharedCache,
    placeholders: Placeholders,
}

impl<S: ArtworkSearch> ArtworkResolver<S> {
    pub fn new(search: S, cache: SharedCache) -> Self {
        Self {
            search,
            cache,
            placeholders: Placeholders::default(),
        }
    }

    pub fn with_placeholders(mut self, placeholders: Placeholders) -> Self {
        self.placeholders = placeholders;
        self
    }

    pub fn cache(&self) -> &SharedCache {
        &self.cache
    }

    pub fn placeholders(&self) -> &Placeholders {
        &self.placeholders
    }

    /// Resolve a raw filename to an image URL. Never fails: on any lookup
    /// failure the result is a placeholder rendering the cleaned title.
    pub async fn resolve(&self, raw: &str) -> String {
        self.resolve_detailed(raw).await.url
    }

    #[tracing::instrument(name = "resolve_artwork", skip(self), fields(raw = %raw))]
    pub async fn resolve_detailed(&self, raw: &str) -> Artwork {
        let title = clean_title(raw);

        if let Some(url) = self.cache.get(&title) {
            tracing::debug!(title = %title, "Artwork cache hit");
            return Artwork {
                title,
                url,
                source: ArtworkSource::Cached,
            };
        }

        let (url, source) = if title.is_empty() {
            tracing::debug!("Empty title, skipping search");
            (self.placeholders.backdrop(&title), ArtworkSource::Placeholder)
        } else {
            self.search_chain(raw, &title).await
        };

        // Lock is only taken here, after all network calls have finished.
        self.cache.put(title.clone(), url.clone());
        Artwork { title, url, source }
    }

    async fn search_chain(&self, raw: &str, title: &str) -> (String, ArtworkSource) {
        let attrs = detect(raw);
        let scope = scope_for(attrs.content_type);
        let term = search_term(title, attrs.region);

        if let Some(url) = self.lookup(scope, &term).await {
            return (url, ArtworkSource::Scoped);
        }
        if let Some(url) = self.lookup(SearchScope::Multi, title).await {
            return (url, ArtworkSource::Multi);
        }

        tracing::debug!(title = %title, "No artwork found, using placeholder");
        (self.placeholders.backdrop(title), ArtworkSource::Placeholder)
    }

    /// First hit's backdrop (or poster). Errors and empty results are `None`.
    async fn lookup(&self, scope: SearchScope, query: &str) -> Option<String> {
        match self.search.search(scope, query).await {
            Ok(hits) => {
                let url = hits.first().and_then(|hit| hit.image_url()).map(str::to_string);
                tracing::debug!(
                    scope = %scope,
                    query,
                    results = hits.len(),
                    matched = url.is_some(),
                    "Artwork search"
                );
                url
            }
            Err(e) => {
                tracing::debug!(scope = %scope, query, error = %e, "Artwork search failed");
                None
            }
        }
    }

    /// Resolve many raw filenames with at most `concurrency` in flight.
    /// Returns how many were resolved.
    pub async fn prefetch<I>(&self, raws: I, concurrency: usize) -> usize
    where
        I: IntoIterator<Item = String>,
    {
        let resolved = stream::iter(raws)
            .map(|raw| async move { self.resolve_detailed(&raw).await })
            .buffer_unordered(concurrency.max(1))
            .fold(0usize, |count, _| async move { count + 1 })
            .await;
        tracing::info!(resolved, cached = self.cache.len(), "Artwork prefetch complete");
        resolved
    }
}

/// Search scope for a detected content type.
pub fn scope_for(content_type: ContentType) -> SearchScope {
    match content_type {
        ContentType::Movie => SearchScope::Movie,
        ContentType::Series => SearchScope::Tv,
    }
}

/// `"Title (IN)"` when a region was detected, the bare title otherwise.
pub fn search_term(title: &str, region: Option<RegionCode>) -> String {
    match region {
        Some(region) => format!("{title} ({region})"),
        None => title.to_string(),
    }
}
