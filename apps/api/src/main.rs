mod analysis;
mod catalog;
mod config;
mod errors;
mod extraction;
mod generation;
mod imagegen;
mod layout;
mod quota;
mod render;
mod routes;
mod state;
mod storage;
mod titles;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::analysis::TechAnalyzer;
use crate::catalog::TemplateCatalog;
use crate::config::Config;
use crate::generation::Orchestrator;
use crate::imagegen::ImagenClient;
use crate::layout::CanvasSize;
use crate::quota::QuotaTracker;
use crate::render::{Compositor, OverlayRenderer, Renderer};
use crate::routes::build_router;
use crate::state::AppState;
use crate::storage::{build_s3_client, S3ImageStore};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Constellation API v{}", env!("CARGO_PKG_VERSION"));

    let analyzer = TechAnalyzer::new()?;
    let catalog = TemplateCatalog::load()?;

    // Sprites and fonts are loaded once; rendering shares them across requests.
    let compositor = Compositor::load(config.star_sprites_dir.as_deref())?;
    info!("Compositor ready ({} star sprites)", compositor.sprite_count());
    let renderer = Arc::new(Renderer::new(
        compositor,
        OverlayRenderer::new(config.fonts_dir.as_deref()),
    ));

    let imagen = ImagenClient::new(
        &config.gcp_project_id,
        &config.gcp_region,
        &config.imagen_model,
        config.gcp_access_token.clone(),
    )?;
    info!("Imagen client initialized (model: {})", config.imagen_model);

    let s3 = build_s3_client(&config).await;
    let store = S3ImageStore::new(s3, config.s3_bucket.clone(), &config.public_base_url);
    info!("S3 client initialized (bucket: {})", config.s3_bucket);

    let quota = Arc::new(QuotaTracker::new(config.daily_quota));
    info!("Daily quota: {} generations", config.daily_quota);

    let orchestrator = Orchestrator::new(
        analyzer,
        catalog,
        renderer,
        Arc::new(imagen),
        Arc::new(store),
        quota.clone(),
        CanvasSize::square(config.canvas_size),
    );

    let state = AppState {
        orchestrator: Arc::new(orchestrator),
        quota,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(config.cors_layer()?);

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
