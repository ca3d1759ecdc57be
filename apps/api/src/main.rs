use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use pathway::catalog::load_catalog;
use pathway::config::Config;
use pathway::layout::default_page_config;
use pathway::render::PdfRenderer;
use pathway::routes::build_router;
use pathway::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on malformed values)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Career Pathway API v{}", env!("CARGO_PKG_VERSION"));

    // Load the catalog once; it is read-only from here on
    let catalog = load_catalog(config.catalog_path.as_deref()).context("Failed to load catalog")?;
    info!(
        "Catalog loaded: {} industries, {} roles",
        catalog.list_industries().len(),
        catalog.role_count()
    );

    let page_config = default_page_config(config.page_size);
    info!(
        "Document page config: {:?} {}x{}pt",
        page_config.size, page_config.width_pt, page_config.height_pt
    );

    let state = AppState {
        catalog: Arc::new(catalog),
        renderer: Arc::new(PdfRenderer::new(page_config)),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
