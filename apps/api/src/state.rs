use std::sync::Arc;

use crate::config::Config;
use crate::layout::PostTemplate;
use crate::llm_client::CaptionGenerator;
use crate::news::FeedSource;
use crate::render::PostRenderer;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable feed transport. Default: RssFeedClient.
    pub feed: Arc<dyn FeedSource>,
    /// Pluggable caption backend. Default: LlmClient (Gemini).
    pub captions: Arc<dyn CaptionGenerator>,
    /// Pluggable rasterizer. Default: ResvgRenderer.
    pub renderer: Arc<dyn PostRenderer>,
    /// Canvas, typography and branding of generated posts.
    pub template: PostTemplate,
}
