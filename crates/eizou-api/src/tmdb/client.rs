use std::time::Duration;

use reqwest::Client;

use super::error::TmdbError;
use super::types::TmdbSearchResponse;
use crate::traits::{ArtworkSearch, SearchHit, SearchScope};

/// TMDB v3 API root.
pub const DEFAULT_API_BASE: &str = "https://api.themoviedb.org/3";

/// Prefix for full-resolution images; TMDB returns paths like `/abc.jpg`.
pub const DEFAULT_IMAGE_BASE: &str = "https://image.tmdb.org/t/p/original";

/// TMDB search client.
pub struct TmdbClient {
    api_key: String,
    api_base: String,
    image_base: String,
    http: Client,
}

impl TmdbClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_client(Client::new(), api_key)
    }

    /// Build on an existing `reqwest::Client` (shared pool, custom timeouts).
    pub fn with_client(http: Client, api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_base: DEFAULT_API_BASE.to_string(),
            image_base: DEFAULT_IMAGE_BASE.to_string(),
            http,
        }
    }

    /// Client whose requests give up after `timeout`.
    pub fn with_timeout(api_key: impl Into<String>, timeout: Duration) -> Result<Self, TmdbError> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(http, api_key))
    }

    /// Override the API root (trailing slash is ignored).
    pub fn api_base(mut self, base: impl Into<String>) -> Self {
        self.api_base = base.into().trim_end_matches('/').to_string();
        self
    }

    /// Override the image URL prefix (trailing slash is ignored).
    pub fn image_base(mut self, base: impl Into<String>) -> Self {
        self.image_base = base.into().trim_end_matches('/').to_string();
        self
    }

    pub fn has_api_key(&self) -> bool {
        !self.api_key.is_empty()
    }

    fn search_url(&self, scope: SearchScope) -> String {
        format!("{}/search/{}", self.api_base, scope.as_path())
    }

    async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, TmdbError> {
        if resp.status().is_success() {
            Ok(resp)
        } else {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            tracing::warn!(status, "TMDB API error");
            Err(TmdbError::Api {
                status,
                message: body,
            })
        }
    }

    /// Search `scope` for `query`. The query is percent-encoded by the request builder.
    pub async fn search_images(
        &self,
        scope: SearchScope,
        query: &str,
    ) -> Result<Vec<SearchHit>, TmdbError> {
        if !self.has_api_key() {
            return Err(TmdbError::MissingApiKey);
        }

        let resp = self
            .http
            .get(self.search_url(scope))
            .query(&[("api_key", self.api_key.as_str()), ("query", query)])
            .send()
            .await?;

        let resp = Self::check_response(resp).await?;
        let body: TmdbSearchResponse = resp
            .json()
            .await
            .map_err(|e| TmdbError::Parse(e.to_string()))?;

        tracing::debug!(%scope, query, results = body.results.len(), "TMDB search");

        Ok(body
            .results
            .into_iter()
            .map(|item| item.into_hit(&self.image_base))
            .collect())
    }
}

impl ArtworkSearch for TmdbClient {
    type Error = TmdbError;

    async fn search(&self, scope: SearchScope, query: &str) -> Result<Vec<SearchHit>, TmdbError> {
        self.search_images(scope, query).await
    }
}
