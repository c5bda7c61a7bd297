use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;
use crate::news::FeedError;
use crate::render::RenderError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Upstream failures are logged here with their full cause; the client only
/// ever sees a fixed message per boundary.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Feed error: {0}")]
    Feed(#[from] FeedError),

    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Feed(e) => {
                tracing::error!("Feed error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to fetch news.".to_string(),
                )
            }
            AppError::Render(e) => {
                tracing::error!("Render error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to generate post image".to_string(),
                )
            }
            AppError::Llm(e) => {
                tracing::error!("LLM error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to generate AI content".to_string(),
                )
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_maps_to_bad_request() {
        let response = AppError::Validation("Headline is required".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_upstream_errors_map_to_server_error() {
        let feed = AppError::Feed(FeedError::Status { status: 502 }).into_response();
        assert_eq!(feed.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let render = AppError::Render(RenderError::PixmapAllocation {
            width: 0,
            height: 0,
        })
        .into_response();
        assert_eq!(render.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let llm = AppError::Llm(LlmError::Api {
            status: 403,
            message: "API key not valid".to_string(),
        })
        .into_response();
        assert_eq!(llm.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
