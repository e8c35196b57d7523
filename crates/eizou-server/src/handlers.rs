//! Route handlers.
//!
//! Addon clients request `<id>.json`; the suffix is stripped here because a
//! path segment can only be captured whole.

use axum::extract::{Path, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::Json;
use eizou_api::ArtworkSearch;
use eizou_core::models::MediaItem;
use url::{form_urlencoded, Url};

use crate::addon::{
    CatalogResponse, Manifest, MetaDetail, MetaPreview, MetaResponse, Stream, StreamResponse,
    Subtitle, SubtitlesResponse,
};
use crate::state::AppState;

pub async fn manifest<S: ArtworkSearch + 'static>(
    State(state): State<AppState<S>>,
) -> Json<Manifest> {
    Json(Manifest::new(state.library.catalog_ids()))
}

pub async fn catalog<S: ArtworkSearch + 'static>(
    State(state): State<AppState<S>>,
    Path(catalog): Path<String>,
) -> (StatusCode, Json<CatalogResponse>) {
    catalog_response(&state, strip_json(&catalog), None)
}

/// `/catalog/movie/{catalog}/search=<query>.json`
pub async fn catalog_search<S: ArtworkSearch + 'static>(
    State(state): State<AppState<S>>,
    Path((catalog, extra)): Path<(String, String)>,
) -> (StatusCode, Json<CatalogResponse>) {
    let search = form_urlencoded::parse(strip_json(&extra).as_bytes())
        .find(|(key, _)| key == "search")
        .map(|(_, value)| value.into_owned());
    catalog_response(&state, &catalog, search.as_deref())
}

fn catalog_response<S: ArtworkSearch>(
    state: &AppState<S>,
    catalog: &str,
    search: Option<&str>,
) -> (StatusCode, Json<CatalogResponse>) {
    tracing::debug!(catalog, search, "Catalog request");
    let Some(items) = state.library.catalog(catalog) else {
        return (StatusCode::NOT_FOUND, Json(CatalogResponse { metas: Vec::new() }));
    };

    let placeholders = state.resolver.placeholders();
    let needle = search.map(str::to_lowercase);
    let metas = items
        .into_iter()
        .map(|item| MetaPreview::new(item, placeholders))
        .filter(|meta| match &needle {
            Some(needle) => meta.name.to_lowercase().contains(needle),
            None => true,
        })
        .collect();
    (StatusCode::OK, Json(CatalogResponse { metas }))
}

pub async fn meta<S: ArtworkSearch + 'static>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> (StatusCode, Json<MetaResponse>) {
    let id = strip_json(&id);
    let Some(item) = state.library.item(id) else {
        return (StatusCode::NOT_FOUND, Json(MetaResponse { meta: None }));
    };

    let background = match tokio::time::timeout(
        state.resolve_timeout,
        state.resolver.resolve(&item.title),
    )
    .await
    {
        Ok(url) => url,
        Err(_) => {
            tracing::warn!(id, title = %item.title, "Artwork resolution timed out");
            state.resolver.placeholders().backdrop(&item.display_title())
        }
    };

    let meta = MetaDetail::new(item, state.resolver.placeholders(), background);
    (StatusCode::OK, Json(MetaResponse { meta: Some(meta) }))
}

pub async fn stream<S: ArtworkSearch + 'static>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> (StatusCode, Json<StreamResponse>) {
    let Some(item) = state.library.item(strip_json(&id)) else {
        return (StatusCode::NOT_FOUND, Json(StreamResponse { streams: Vec::new() }));
    };

    let streams = vec![Stream {
        title: item.title.clone(),
        url: file_url(&headers, &item.rel_path),
    }];
    (StatusCode::OK, Json(StreamResponse { streams }))
}

pub async fn subtitles<S: ArtworkSearch + 'static>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Json<SubtitlesResponse> {
    Json(subtitles_response(state.library.item(strip_json(&id)), &headers))
}

/// `/subtitles/movie/{id}/filename=<name>.json`; the extra is ignored.
pub async fn subtitles_extra<S: ArtworkSearch + 'static>(
    State(state): State<AppState<S>>,
    Path((id, _extra)): Path<(String, String)>,
    headers: HeaderMap,
) -> Json<SubtitlesResponse> {
    Json(subtitles_response(state.library.item(&id), &headers))
}

fn subtitles_response(item: Option<&MediaItem>, headers: &HeaderMap) -> SubtitlesResponse {
    let subtitles = item
        .map(|item| {
            item.subtitles
                .iter()
                .map(|rel| Subtitle::new(rel, file_url(headers, rel)))
                .collect()
        })
        .unwrap_or_default();
    SubtitlesResponse { subtitles }
}

fn strip_json(segment: &str) -> &str {
    segment.strip_suffix(".json").unwrap_or(segment)
}

/// Absolute URL of a media-root file, built from the request's `Host`.
/// `https` only when a proxy says so via `X-Forwarded-Proto`.
pub(crate) fn file_url(headers: &HeaderMap, rel_path: &str) -> String {
    let host = headers
        .get(header::HOST)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("localhost");
    let scheme = match headers.get("x-forwarded-proto").and_then(|v| v.to_str().ok()) {
        Some(proto) if proto.eq_ignore_ascii_case("https") => "https",
        _ => "http",
    };

    let base = format!("{scheme}://{host}/");
    match Url::parse(&base) {
        Ok(mut url) => {
            if let Ok(mut segments) = url.path_segments_mut() {
                segments
                    .pop_if_empty()
                    .push("files")
                    .extend(rel_path.split('/'));
            }
            url.into()
        }
        Err(_) => format!("{base}files/{rel_path}"),
    }
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;

    use super::*;

    fn headers(host: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::HOST, HeaderValue::from_str(host).unwrap());
        headers
    }

    #[test]
    fn test_strip_json() {
        assert_eq!(strip_json("0280690.json"), "0280690");
        assert_eq!(strip_json("0280690"), "0280690");
    }

    #[test]
    fn test_file_url_uses_host() {
        assert_eq!(
            file_url(&headers("192.168.1.10:8081"), "Movies/Inception.mkv"),
            "http://192.168.1.10:8081/files/Movies/Inception.mkv"
        );
    }

    #[test]
    fn test_file_url_forwarded_https() {
        let mut headers = headers("media.example.org");
        headers.insert("x-forwarded-proto", HeaderValue::from_static("https"));
        assert_eq!(
            file_url(&headers, "a.mkv"),
            "https://media.example.org/files/a.mkv"
        );
    }

    #[test]
    fn test_file_url_encodes_segments() {
        assert_eq!(
            file_url(&headers("h:1"), "My Movies/Tom & Jerry #1.mkv"),
            "http://h:1/files/My%20Movies/Tom%20&%20Jerry%20%231.mkv"
        );
    }

    #[test]
    fn test_file_url_without_host() {
        assert_eq!(
            file_url(&HeaderMap::new(), "a.mkv"),
            "http://localhost/files/a.mkv"
        );
    }
}
