use eizou_api::tmdb::TmdbError;
use eizou_core::error::EizouError;
use thiserror::Error;

/// Startup failures. Request handling never fails, it degrades.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error(transparent)]
    Core(#[from] EizouError),

    #[error("TMDB client: {0}")]
    Tmdb(#[from] TmdbError),

    #[error("server IO error: {0}")]
    Io(#[from] std::io::Error),
}
