mod config;
mod directory;
mod errors;
mod models;
mod placement;
mod resume;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::directory::{load_companies, load_curriculum};
use crate::resume::extract::{PdfTextExtractor, TextExtractor};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (defaults cover local development)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Placement API v{}", env!("CARGO_PKG_VERSION"));

    // Load the static directory data once; immutable for the process lifetime
    let companies = Arc::new(load_companies(&config.companies_path)?);
    let curriculum = Arc::new(load_curriculum(&config.curriculum_path)?);

    // Default resume text backend (PDF). Swappable behind the trait.
    let extractor: Arc<dyn TextExtractor> = Arc::new(PdfTextExtractor);

    // Build app state
    let state = AppState {
        config: config.clone(),
        companies,
        curriculum,
        extractor,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
