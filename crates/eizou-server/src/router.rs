use axum::routing::get;
use axum::Router;
use eizou_api::ArtworkSearch;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the addon router: JSON routes, `/files` static serving, permissive
/// CORS (so browser clients can preflight) and request tracing.
pub fn create_router<S: ArtworkSearch + 'static>(state: AppState<S>) -> Router {
    let files = ServeDir::new(&state.media_dir);

    Router::new()
        .route("/manifest.json", get(handlers::manifest::<S>))
        .route("/catalog/movie/{catalog}", get(handlers::catalog::<S>))
        .route(
            "/catalog/movie/{catalog}/{*extra}",
            get(handlers::catalog_search::<S>),
        )
        .route("/meta/movie/{id}", get(handlers::meta::<S>))
        .route("/stream/movie/{id}", get(handlers::stream::<S>))
        .route("/subtitles/movie/{id}", get(handlers::subtitles::<S>))
        .route(
            "/subtitles/movie/{id}/{*extra}",
            get(handlers::subtitles_extra::<S>),
        )
        .nest_service("/files", files)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::path::Path;
    use std::sync::Arc;
    use std::time::Duration;

    use axum::body::{to_bytes, Body};
    use axum::http::{header, Method, Request, StatusCode};
    use eizou_api::{SearchHit, SearchScope};
    use eizou_core::artwork::ArtworkResolver;
    use eizou_core::cache::ResolutionCache;
    use eizou_core::config::AppConfig;
    use eizou_core::scanner::scan_media_dir;
    use serde_json::Value;
    use tower::ServiceExt;

    use super::*;

    #[derive(Debug, thiserror::Error)]
    #[error("offline")]
    struct Offline;

    /// Search that always fails, so artwork falls back to placeholders.
    struct OfflineSearch;

    impl ArtworkSearch for OfflineSearch {
        type Error = Offline;

        async fn search(&self, _: SearchScope, _: &str) -> Result<Vec<SearchHit>, Offline> {
            Err(Offline)
        }
    }

    /// Search that never answers in time.
    struct StalledSearch;

    impl ArtworkSearch for StalledSearch {
        type Error = Offline;

        async fn search(&self, _: SearchScope, _: &str) -> Result<Vec<SearchHit>, Offline> {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Err(Offline)
        }
    }

    const INCEPTION_ID: &str = "0280690";

    fn media_root() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        let movies = dir.path().join("Movies");
        std::fs::create_dir_all(&movies).unwrap();
        std::fs::write(movies.join("Inception.2010.720p.BluRay.x264-YTS.mkv"), b"video").unwrap();
        std::fs::write(
            movies.join("Inception.2010.720p.BluRay.x264-YTS.en.vtt"),
            b"WEBVTT\n",
        )
        .unwrap();
        let shows = dir.path().join("Shows");
        std::fs::create_dir_all(&shows).unwrap();
        std::fs::write(
            shows.join("The.Traitors.India.S01E01.HINDI.1080p.H264-TheArmory.mkv"),
            b"video",
        )
        .unwrap();
        dir
    }

    fn app_with<S: ArtworkSearch + 'static>(root: &Path, search: S, timeout: Duration) -> Router {
        let library = scan_media_dir(root, &AppConfig::default().library).unwrap();
        let resolver = ArtworkResolver::new(search, Arc::new(ResolutionCache::new()));
        create_router(AppState {
            library: Arc::new(library),
            resolver: Arc::new(resolver),
            media_dir: root.to_path_buf(),
            resolve_timeout: timeout,
        })
    }

    fn app(root: &Path) -> Router {
        app_with(root, OfflineSearch, Duration::from_secs(5))
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder()
            .uri(uri)
            .header(header::HOST, "media.local:8081")
            .body(Body::empty())
            .unwrap()
    }

    async fn json(response: axum::response::Response) -> Value {
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_manifest_lists_catalogs() {
        let root = media_root();
        let response = app(root.path()).oneshot(get("/manifest.json")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
            "*"
        );
        let json = json(response).await;
        assert_eq!(json["id"], "stremio-local");
        let ids: Vec<_> = json["catalogs"]
            .as_array()
            .unwrap()
            .iter()
            .map(|c| c["id"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(ids, vec!["Movies", "Shows"]);
    }

    #[tokio::test]
    async fn test_catalog_returns_clean_titles() {
        let root = media_root();
        let response = app(root.path())
            .oneshot(get("/catalog/movie/Movies.json"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = json(response).await;
        let metas = json["metas"].as_array().unwrap();
        assert_eq!(metas.len(), 1);
        assert_eq!(metas[0]["id"], INCEPTION_ID);
        assert_eq!(metas[0]["type"], "movie");
        assert_eq!(metas[0]["name"], "Inception 2010");
        assert_eq!(
            metas[0]["poster"],
            "https://dummyimage.com/200x300/444444/ffffff&text=Inception+2010"
        );
    }

    #[tokio::test]
    async fn test_unknown_catalog_is_404_with_empty_list() {
        let root = media_root();
        let response = app(root.path())
            .oneshot(get("/catalog/movie/Music.json"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(json(response).await["metas"], serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_catalog_search_filters_by_title() {
        let root = media_root();
        let app = app(root.path());

        let hit = app
            .clone()
            .oneshot(get("/catalog/movie/Movies/search=incep.json"))
            .await
            .unwrap();
        assert_eq!(json(hit).await["metas"].as_array().unwrap().len(), 1);

        let miss = app
            .oneshot(get("/catalog/movie/Movies/search=Dune%20Part%20Two.json"))
            .await
            .unwrap();
        assert!(json(miss).await["metas"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_meta_falls_back_to_placeholder_background() {
        let root = media_root();
        let response = app(root.path())
            .oneshot(get(&format!("/meta/movie/{INCEPTION_ID}.json")))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = json(response).await;
        let meta = &json["meta"];
        assert_eq!(meta["name"], "Inception 2010");
        assert_eq!(meta["contentType"], "movie");
        assert_eq!(
            meta["background"],
            "https://dummyimage.com/1280x720/222222/ffffff&text=Inception+2010"
        );
    }

    #[tokio::test]
    async fn test_meta_reports_series_and_region() {
        let root = media_root();
        let library = scan_media_dir(root.path(), &AppConfig::default().library).unwrap();
        let id = library.catalog("Shows").unwrap()[0].id.clone();

        let response = app(root.path())
            .oneshot(get(&format!("/meta/movie/{id}.json")))
            .await
            .unwrap();

        let json = json(response).await;
        assert_eq!(json["meta"]["name"], "The Traitors");
        assert_eq!(json["meta"]["contentType"], "series");
        assert_eq!(json["meta"]["region"], "IN");
    }

    #[tokio::test]
    async fn test_meta_timeout_uses_placeholder() {
        let root = media_root();
        let app = app_with(root.path(), StalledSearch, Duration::from_millis(50));

        let response = app
            .oneshot(get(&format!("/meta/movie/{INCEPTION_ID}.json")))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            json(response).await["meta"]["background"],
            "https://dummyimage.com/1280x720/222222/ffffff&text=Inception+2010"
        );
    }

    #[tokio::test]
    async fn test_unknown_meta_is_404_null() {
        let root = media_root();
        let response = app(root.path())
            .oneshot(get("/meta/movie/9999999.json"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(json(response).await["meta"], Value::Null);
    }

    #[tokio::test]
    async fn test_stream_url_is_absolute() {
        let root = media_root();
        let response = app(root.path())
            .oneshot(get(&format!("/stream/movie/{INCEPTION_ID}.json")))
            .await
            .unwrap();

        let json = json(response).await;
        assert_eq!(json["streams"][0]["title"], "Inception.2010.720p.BluRay.x264-YTS");
        assert_eq!(
            json["streams"][0]["url"],
            "http://media.local:8081/files/Movies/Inception.2010.720p.BluRay.x264-YTS.mkv"
        );
    }

    #[tokio::test]
    async fn test_unknown_stream_is_404() {
        let root = media_root();
        let response = app(root.path())
            .oneshot(get("/stream/movie/9999999.json"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(json(response).await["streams"], serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_subtitles_with_and_without_extra() {
        let root = media_root();
        let app = app(root.path());

        for uri in [
            format!("/subtitles/movie/{INCEPTION_ID}.json"),
            format!("/subtitles/movie/{INCEPTION_ID}/filename=Inception.mkv.json"),
        ] {
            let response = app.clone().oneshot(get(&uri)).await.unwrap();
            assert_eq!(response.status(), StatusCode::OK, "{uri}");
            let json = json(response).await;
            let subs = json["subtitles"].as_array().unwrap();
            assert_eq!(subs.len(), 1, "{uri}");
            assert_eq!(subs[0]["id"], "Inception.2010.720p.BluRay.x264-YTS.en");
            assert_eq!(subs[0]["lang"], "English");
            assert_eq!(
                subs[0]["url"],
                "http://media.local:8081/files/Movies/Inception.2010.720p.BluRay.x264-YTS.en.vtt"
            );
        }
    }

    #[tokio::test]
    async fn test_subtitles_unknown_id_is_empty() {
        let root = media_root();
        let response = app(root.path())
            .oneshot(get("/subtitles/movie/9999999.json"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json(response).await["subtitles"], serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_files_are_served() {
        let root = media_root();
        let response = app(root.path())
            .oneshot(get(
                "/files/Movies/Inception.2010.720p.BluRay.x264-YTS.en.vtt",
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers().get(header::CONTENT_TYPE).unwrap(), "text/vtt");
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"WEBVTT\n");
    }

    #[tokio::test]
    async fn test_cors_preflight() {
        let root = media_root();
        let request = Request::builder()
            .method(Method::OPTIONS)
            .uri("/manifest.json")
            .header(header::ORIGIN, "https://web.stremio.com")
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "GET")
            .body(Body::empty())
            .unwrap();

        let response = app(root.path()).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response
            .headers()
            .contains_key(header::ACCESS_CONTROL_ALLOW_METHODS));
    }
}
