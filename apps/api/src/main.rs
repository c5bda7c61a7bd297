mod caption;
mod config;
mod errors;
mod layout;
mod llm_client;
mod models;
mod news;
mod render;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::layout::PostTemplate;
use crate::llm_client::LlmClient;
use crate::news::RssFeedClient;
use crate::render::ResvgRenderer;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Zafaroo API v{}", env!("CARGO_PKG_VERSION"));

    let feed = RssFeedClient::new()?;
    info!(default_feed = %config.default_feed_url, "Feed client initialized");

    let llm = LlmClient::new(config.gemini_api_key.clone())?;
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    // Font loading scans the filesystem; keep it off the runtime threads.
    let font_dir = config.font_dir.clone();
    let renderer =
        tokio::task::spawn_blocking(move || ResvgRenderer::new(font_dir.as_deref())).await?;

    let template = PostTemplate::default();
    info!(
        "Post template: {}x{} \"{}\"",
        template.width, template.height, template.brand_label
    );

    let state = AppState {
        config: config.clone(),
        feed: Arc::new(feed),
        captions: Arc::new(llm),
        renderer: Arc::new(renderer),
        template,
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
