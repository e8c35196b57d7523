use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::error::EizouError;

const DEFAULT_CONFIG: &str = include_str!("../../../config/default.toml");

/// Top-level application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub library: LibraryConfig,
    pub artwork: ArtworkConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LibraryConfig {
    pub media_dir: PathBuf,
    /// Lowercase, without the dot.
    pub video_extensions: Vec<String>,
    pub subtitle_extensions: Vec<String>,
}

/// Artwork lookup settings. The TMDB API key never lives here: it is
/// supplied on the command line or through `TMDB_API_KEY`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtworkConfig {
    pub api_base: String,
    pub image_base: String,
    pub placeholder_base: String,
    pub request_timeout_secs: u64,
    /// Resolve artwork for the whole library right after the startup scan.
    pub prefetch: bool,
    pub prefetch_concurrency: usize,
}

impl ArtworkConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Budget for a full resolution: a scoped and a multi request.
    pub fn resolve_timeout(&self) -> Duration {
        self.request_timeout() * 2
    }
}

impl AppConfig {
    /// Load config: user file (if exists) merged over built-in defaults.
    pub fn load() -> Result<Self, EizouError> {
        let user_path = Self::config_path();
        if user_path.exists() {
            Self::load_from(&user_path)
        } else {
            Self::from_toml_str("")
        }
    }

    /// Load a specific config file, merged over built-in defaults.
    pub fn load_from(path: &Path) -> Result<Self, EizouError> {
        let user_str = std::fs::read_to_string(path)
            .map_err(|e| EizouError::Config(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&user_str)
    }

    /// Parse a (possibly partial) TOML document over the built-in defaults.
    pub fn from_toml_str(user_str: &str) -> Result<Self, EizouError> {
        let mut base: toml::Table =
            toml::from_str(DEFAULT_CONFIG).map_err(|e| EizouError::Config(e.to_string()))?;
        let user: toml::Table =
            toml::from_str(user_str).map_err(|e| EizouError::Config(e.to_string()))?;
        merge_tables(&mut base, user);
        toml::Value::Table(base)
            .try_into()
            .map_err(|e: toml::de::Error| EizouError::Config(e.to_string()))
    }

    /// Path to user config file (XDG on Linux, AppData on Windows).
    pub fn config_path() -> PathBuf {
        Self::project_dirs()
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("config.toml"))
    }

    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("", "", "eizou")
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        toml::from_str(DEFAULT_CONFIG).expect("built-in default config is valid TOML")
    }
}

/// Recursively overlay `overlay` onto `base`; nested tables merge key by key.
fn merge_tables(base: &mut toml::Table, overlay: toml::Table) {
    for (key, value) in overlay {
        if let toml::Value::Table(over) = value {
            if let Some(toml::Value::Table(existing)) = base.get_mut(&key) {
                merge_tables(existing, over);
                continue;
            }
            base.insert(key, toml::Value::Table(over));
        } else {
            base.insert(key, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config = AppConfig::default();
        assert_eq!(config.server.port, 8081);
        assert_eq!(config.library.media_dir, PathBuf::from("/media"));
        assert_eq!(config.library.video_extensions, vec!["mp4", "mkv"]);
        assert!(config.artwork.prefetch);
        assert_eq!(config.artwork.request_timeout(), Duration::from_secs(10));
        assert_eq!(config.artwork.resolve_timeout(), Duration::from_secs(20));
    }

    #[test]
    fn test_partial_user_config_keeps_defaults() {
        let config = AppConfig::from_toml_str(
            "[server]\nport = 9000\n\n[artwork]\nprefetch = false\n",
        )
        .unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert!(!config.artwork.prefetch);
        assert_eq!(config.artwork.placeholder_base, "https://dummyimage.com");
        assert_eq!(config.library.subtitle_extensions, vec!["srt", "vtt"]);
    }

    #[test]
    fn test_empty_user_config_is_default() {
        let config = AppConfig::from_toml_str("").unwrap();
        assert_eq!(config.server.port, AppConfig::default().server.port);
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = AppConfig::from_toml_str("[server\nport = ").unwrap_err();
        assert!(matches!(err, EizouError::Config(_)));
    }

    #[test]
    fn test_wrong_type_is_config_error() {
        let err = AppConfig::from_toml_str("[server]\nport = \"eighty\"\n").unwrap_err();
        assert!(matches!(err, EizouError::Config(_)));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[library]\nmedia_dir = \"/srv/media\"\n").unwrap();
        let config = AppConfig::load_from(&path).unwrap();
        assert_eq!(config.library.media_dir, PathBuf::from("/srv/media"));
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let err = AppConfig::load_from(Path::new("/nonexistent/eizou.toml")).unwrap_err();
        assert!(matches!(err, EizouError::Config(_)));
    }

    #[test]
    fn test_roundtrip() {
        let config = AppConfig::default();
        let serialized = toml::to_string_pretty(&config).unwrap();
        let deserialized: AppConfig = toml::from_str(&serialized).unwrap();
        assert_eq!(deserialized.server.port, config.server.port);
        assert_eq!(deserialized.artwork.api_base, config.artwork.api_base);
    }
}
