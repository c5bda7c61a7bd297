pub mod health;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::services::ServeDir;

use crate::caption;
use crate::news;
use crate::render;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    // Operator UI: `/` serves index.html from the frontend directory.
    let frontend = ServeDir::new(&state.config.frontend_dir);

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/scrape", get(news::handlers::handle_scrape))
        .route(
            "/generate-post",
            post(render::handlers::handle_generate_post),
        )
        .route("/generate-ai", post(caption::handlers::handle_generate_ai))
        .fallback_service(frontend)
        .with_state(state)
}
