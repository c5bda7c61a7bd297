//! Axum route handlers for post image generation.

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{Local, Utc};
use tracing::info;

use crate::errors::AppError;
use crate::layout::hindi_date_stamp;
use crate::models::HeadlineRequest;
use crate::render::{post_filename, RenderError};
use crate::state::AppState;

/// POST /generate-post
///
/// Lays the headline out on the post template and returns the PNG as an
/// attachment.
pub async fn handle_generate_post(
    State(state): State<AppState>,
    body: Option<Json<HeadlineRequest>>,
) -> Result<Response, AppError> {
    let request = HeadlineRequest::from_body(body);
    let headline = request.require_headline()?;

    let date_stamp = hindi_date_stamp(Local::now().date_naive());
    let svg = state.template.render_svg(headline, &date_stamp);

    // CPU-bound: keep rasterization off the async executor.
    let renderer = state.renderer.clone();
    let png = tokio::task::spawn_blocking(move || renderer.render_png(&svg))
        .await
        .map_err(|e| RenderError::Task(e.to_string()))??;

    let filename = post_filename(Utc::now().timestamp_millis());
    info!(filename = %filename, bytes = png.len(), "Generated post image");

    Ok((
        [
            (header::CONTENT_TYPE, "image/png".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        png,
    )
        .into_response())
}
