use anyhow::{Context, Result};
use std::path::PathBuf;

/// Google News search for Paonta Sahib, Hindi edition.
pub const DEFAULT_FEED_URL: &str =
    "https://news.google.com/rss/search?q=Paonta+Sahib&hl=hi&gl=IN&ceid=IN:hi";

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: String,
    /// Feed used by `/scrape` when the caller supplies no `customUrl`.
    pub default_feed_url: String,
    pub port: u16,
    pub rust_log: String,
    /// Directory holding the static operator UI (`index.html` + css).
    pub frontend_dir: PathBuf,
    /// Extra fonts for the rasterizer, loaded on top of the system fonts.
    pub font_dir: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            gemini_api_key: require_env("GEMINI_API_KEY")?,
            default_feed_url: std::env::var("DEFAULT_FEED_URL")
                .unwrap_or_else(|_| DEFAULT_FEED_URL.to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "5000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            frontend_dir: std::env::var("FRONTEND_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("../frontend")),
            font_dir: std::env::var("FONT_DIR").ok().map(PathBuf::from),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
