//! Axum route handlers for AI captions.

use axum::{extract::State, Json};
use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::models::HeadlineRequest;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct CaptionResponse {
    pub content: String,
}

/// POST /generate-ai
///
/// Asks the model for a short caption with hashtags. The headline is sent as
/// submitted, attribution included.
pub async fn handle_generate_ai(
    State(state): State<AppState>,
    body: Option<Json<HeadlineRequest>>,
) -> Result<Json<CaptionResponse>, AppError> {
    let request = HeadlineRequest::from_body(body);
    let headline = request.require_headline()?;

    let content = state.captions.caption(headline).await?;
    info!(chars = content.chars().count(), "Generated AI caption");

    Ok(Json(CaptionResponse { content }))
}
