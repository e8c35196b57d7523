use serde::Deserialize;

use crate::traits::SearchHit;

// ── Search responses ────────────────────────────────────────────

/// Body of `/search/{movie,tv,multi}`. A missing `results` array decodes as empty.
#[derive(Debug, Deserialize)]
pub struct TmdbSearchResponse {
    #[serde(default)]
    pub results: Vec<TmdbSearchItem>,
}

/// One entry of a search response. Movies carry `title`, TV shows `name`;
/// multi search adds `media_type`.
#[derive(Debug, Deserialize)]
pub struct TmdbSearchItem {
    pub title: Option<String>,
    pub name: Option<String>,
    pub media_type: Option<String>,
    pub backdrop_path: Option<String>,
    pub poster_path: Option<String>,
}

impl TmdbSearchItem {
    /// Convert to a [`SearchHit`], joining image paths onto `image_base`.
    /// Empty paths count as missing.
    pub fn into_hit(self, image_base: &str) -> SearchHit {
        let full = |path: Option<String>| {
            path.filter(|p| !p.is_empty())
                .map(|p| format!("{image_base}{p}"))
        };
        SearchHit {
            name: self.title.or(self.name),
            backdrop_url: full(self.backdrop_path),
            poster_url: full(self.poster_path),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://image.tmdb.org/t/p/original";

    #[test]
    fn movie_search_response() {
        let body = r#"{
            "page": 1,
            "results": [
                {"id": 27205, "title": "Inception", "backdrop_path": "/s3TBrRGB1iav7gFOCNx3H31MoES.jpg", "poster_path": "/oYuLEt3zVCKq57qu2F8dT7NIa6f.jpg"}
            ],
            "total_pages": 1,
            "total_results": 1
        }"#;
        let resp: TmdbSearchResponse = serde_json::from_str(body).unwrap();
        let hit = resp.results.into_iter().next().unwrap().into_hit(BASE);
        assert_eq!(hit.name.as_deref(), Some("Inception"));
        assert_eq!(
            hit.image_url(),
            Some("https://image.tmdb.org/t/p/original/s3TBrRGB1iav7gFOCNx3H31MoES.jpg")
        );
    }

    #[test]
    fn tv_result_uses_name_and_null_backdrop() {
        let body = r#"{"results": [{"name": "The Traitors", "backdrop_path": null, "poster_path": "/p.jpg"}]}"#;
        let resp: TmdbSearchResponse = serde_json::from_str(body).unwrap();
        let hit = resp.results.into_iter().next().unwrap().into_hit(BASE);
        assert_eq!(hit.name.as_deref(), Some("The Traitors"));
        assert_eq!(hit.backdrop_url, None);
        assert_eq!(hit.image_url(), Some("https://image.tmdb.org/t/p/original/p.jpg"));
    }

    #[test]
    fn empty_paths_are_missing() {
        let body = r#"{"results": [{"media_type": "person", "backdrop_path": "", "poster_path": ""}]}"#;
        let resp: TmdbSearchResponse = serde_json::from_str(body).unwrap();
        let hit = resp.results.into_iter().next().unwrap().into_hit(BASE);
        assert_eq!(hit.image_url(), None);
    }

    #[test]
    fn missing_results_is_empty() {
        let body = r#"{"status_code": 7, "status_message": "Invalid API key"}"#;
        let resp: TmdbSearchResponse = serde_json::from_str(body).unwrap();
        assert!(resp.results.is_empty());
    }
}
