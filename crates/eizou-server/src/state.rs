use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use eizou_core::artwork::ArtworkResolver;
use eizou_core::models::Library;

/// Shared state handed to every route.
pub struct AppState<S> {
    pub library: Arc<Library>,
    pub resolver: Arc<ArtworkResolver<S>>,
    /// Root served under `/files`.
    pub media_dir: PathBuf,
    /// Upper bound on artwork resolution inside a meta request.
    pub resolve_timeout: Duration,
}

// Manual impl: `S` itself need not be `Clone`.
impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            library: Arc::clone(&self.library),
            resolver: Arc::clone(&self.resolver),
            media_dir: self.media_dir.clone(),
            resolve_timeout: self.resolve_timeout,
        }
    }
}
