//! Axum route handlers for the news feed.

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use chrono::Local;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::news::{todays_news, NewsItem};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ScrapeQuery {
    #[serde(rename = "customUrl")]
    pub custom_url: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ScrapeResponse {
    pub news: Vec<NewsItem>,
}

/// GET /scrape?customUrl=
///
/// Fetches the feed (the configured default unless `customUrl` is given) and
/// returns today's items with cleaned headlines. A malformed query string is
/// answered with a JSON 400 rather than axum's plain-text rejection.
pub async fn handle_scrape(
    State(state): State<AppState>,
    query: Result<Query<ScrapeQuery>, QueryRejection>,
) -> Result<Json<ScrapeResponse>, AppError> {
    let Query(query) = query.map_err(|e| AppError::Validation(e.body_text()))?;

    let url = query
        .custom_url
        .as_deref()
        .map(str::trim)
        .filter(|u| !u.is_empty())
        .unwrap_or(state.config.default_feed_url.as_str());

    let items = state.feed.fetch(url).await?;
    let news = todays_news(items, Local::now().date_naive(), &Local);
    info!(url, count = news.len(), "Scraped today's news");

    Ok(Json(ScrapeResponse { news }))
}
