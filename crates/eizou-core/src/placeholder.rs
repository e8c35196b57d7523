//! Synthesized artwork for titles with no metadata match.
//!
//! URLs point at an image-generator service that renders the title as text:
//! `{base}/{w}x{h}/{bg}/{fg}&text={title}`.

use url::form_urlencoded;

/// Default image-generator endpoint.
pub const DEFAULT_PLACEHOLDER_BASE: &str = "https://dummyimage.com";

/// Dimensions and colors of one placeholder kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaceholderStyle {
    pub width: u32,
    pub height: u32,
    pub background: &'static str,
    pub foreground: &'static str,
}

/// Portrait poster, dark gray on white text.
pub const POSTER: PlaceholderStyle = PlaceholderStyle {
    width: 200,
    height: 300,
    background: "444444",
    foreground: "ffffff",
};

/// Landscape background.
pub const BACKDROP: PlaceholderStyle = PlaceholderStyle {
    width: 1280,
    height: 720,
    background: "222222",
    foreground: "ffffff",
};

/// Builds placeholder URLs against a configurable generator endpoint.
#[derive(Debug, Clone)]
pub struct Placeholders {
    base: String,
}

impl Default for Placeholders {
    fn default() -> Self {
        Self::new(DEFAULT_PLACEHOLDER_BASE)
    }
}

impl Placeholders {
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            base: base.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn poster(&self, title: &str) -> String {
        self.render(POSTER, title)
    }

    pub fn backdrop(&self, title: &str) -> String {
        self.render(BACKDROP, title)
    }

    /// The title is form-encoded, so an empty title still yields a valid URL.
    pub fn render(&self, style: PlaceholderStyle, title: &str) -> String {
        let text: String = form_urlencoded::byte_serialize(title.as_bytes()).collect();
        format!(
            "{}/{}x{}/{}/{}&text={}",
            self.base, style.width, style.height, style.background, style.foreground, text
        )
    }
}
