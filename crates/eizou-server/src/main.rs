mod addon;
mod error;
mod handlers;
mod router;
mod state;

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use eizou_api::TmdbClient;
use eizou_core::artwork::ArtworkResolver;
use eizou_core::cache::shared_cache;
use eizou_core::config::AppConfig;
use eizou_core::placeholder::Placeholders;
use eizou_core::scanner::scan_media_dir;
use tracing_subscriber::EnvFilter;

use crate::error::ServerError;
use crate::state::AppState;

/// Serve a local media folder as a streaming addon.
#[derive(Debug, Parser)]
#[command(name = "eizou", version, about)]
struct Cli {
    /// Media root. Overrides `library.media_dir`.
    media_dir: Option<PathBuf>,

    /// Config file to use instead of the platform default.
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[arg(long, env = "EIZOU_HOST")]
    host: Option<String>,

    #[arg(short, long, env = "EIZOU_PORT")]
    port: Option<u16>,

    /// TMDB v3 API key. Without one, every item gets placeholder artwork.
    #[arg(long, env = "TMDB_API_KEY", hide_env_values = true, default_value = "")]
    tmdb_api_key: String,

    /// Skip resolving artwork for the whole library at startup.
    #[arg(long)]
    no_prefetch: bool,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("eizou=info,tower_http=info")),
        )
        .init();

    if let Err(e) = run(Cli::parse()).await {
        tracing::error!(error = %e, "Fatal error");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), ServerError> {
    let mut config = match &cli.config {
        Some(path) => AppConfig::load_from(path)?,
        None => AppConfig::load()?,
    };
    if let Some(dir) = cli.media_dir {
        config.library.media_dir = dir;
    }
    if let Some(host) = cli.host {
        config.server.host = host;
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    if cli.no_prefetch {
        config.artwork.prefetch = false;
    }

    let library = Arc::new(scan_media_dir(
        &config.library.media_dir,
        &config.library,
    )?);

    if cli.tmdb_api_key.is_empty() {
        tracing::warn!("No TMDB API key configured, artwork will use placeholders");
    }
    let tmdb = TmdbClient::with_timeout(cli.tmdb_api_key, config.artwork.request_timeout())?
        .api_base(&config.artwork.api_base)
        .image_base(&config.artwork.image_base);
    let resolver = Arc::new(
        ArtworkResolver::new(tmdb, shared_cache())
            .with_placeholders(Placeholders::new(config.artwork.placeholder_base.clone())),
    );

    if config.artwork.prefetch && !library.is_empty() {
        let resolver = Arc::clone(&resolver);
        let raws: Vec<String> = library.items().map(|item| item.title.clone()).collect();
        let concurrency = config.artwork.prefetch_concurrency;
        tokio::spawn(async move {
            resolver.prefetch(raws, concurrency).await;
        });
    }

    let app = router::create_router(AppState {
        library,
        resolver,
        media_dir: config.library.media_dir.clone(),
        resolve_timeout: config.artwork.resolve_timeout(),
    });

    let listener =
        tokio::net::TcpListener::bind((config.server.host.as_str(), config.server.port)).await?;
    tracing::info!(addr = %listener.local_addr()?, "Addon listening");
    axum::serve(listener, app).await?;
    Ok(())
}
