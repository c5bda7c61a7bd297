//! Feed client, the single point of entry for outbound feed fetches.
//!
//! RSS 2.0 channels are the norm; Atom feeds are accepted as a fallback since
//! `customUrl` may point anywhere.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;
use tracing::debug;

const FEED_TIMEOUT_SECS: u64 = 30;
const USER_AGENT: &str = concat!("zafaroo-api/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Feed returned status {status}")]
    Status { status: u16 },

    #[error("Feed parse error: {0}")]
    Parse(#[from] rss::Error),
}

/// One `<item>` (or Atom `<entry>`) of the upstream feed, as published.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeedItem {
    pub title: Option<String>,
    pub link: Option<String>,
    /// Raw publish date string (RFC 2822 in well-formed RSS, RFC 3339 for Atom).
    pub pub_date: Option<String>,
    /// Plain-text rendition of the item description.
    pub content_snippet: Option<String>,
}

/// Source of feed items. Implement this to swap the transport without
/// touching the handlers.
///
/// Carried in `AppState` as `Arc<dyn FeedSource>`.
#[async_trait]
pub trait FeedSource: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<Vec<FeedItem>, FeedError>;
}

/// Fetches and parses RSS 2.0 channels (or Atom feeds) over HTTP.
#[derive(Clone)]
pub struct RssFeedClient {
    client: Client,
}

impl RssFeedClient {
    pub fn new() -> Result<Self, FeedError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(FEED_TIMEOUT_SECS))
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl FeedSource for RssFeedClient {
    async fn fetch(&self, url: &str) -> Result<Vec<FeedItem>, FeedError> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        let items = parse_channel(&body)?;
        debug!(url, items = items.len(), "Fetched feed");
        Ok(items)
    }
}

/// Parses an RSS document into feed items, preserving channel order.
///
/// Falls back to Atom when the body is not RSS. If neither parses, the RSS
/// error is returned.
pub fn parse_channel(body: &[u8]) -> Result<Vec<FeedItem>, FeedError> {
    let channel = match rss::Channel::read_from(body) {
        Ok(channel) => channel,
        Err(rss_err) => {
            return match atom_syndication::Feed::read_from(body) {
                Ok(feed) => Ok(atom_items(&feed)),
                Err(_) => Err(rss_err.into()),
            };
        }
    };

    Ok(channel
        .items()
        .iter()
        .map(|item| FeedItem {
            title: item.title().map(str::to_string),
            link: item.link().map(str::to_string),
            pub_date: item.pub_date().map(str::to_string),
            content_snippet: item.description().or(item.content()).map(strip_html),
        })
        .collect())
}

fn atom_items(feed: &atom_syndication::Feed) -> Vec<FeedItem> {
    feed.entries()
        .iter()
        .map(|entry| {
            let summary = entry
                .summary()
                .map(|s| s.as_str())
                .or_else(|| entry.content().and_then(|c| c.value()));

            FeedItem {
                title: Some(entry.title().as_str().to_string()),
                link: entry.links().first().map(|l| l.href().to_string()),
                pub_date: Some(entry.published().unwrap_or(entry.updated()).to_rfc3339()),
                content_snippet: summary.map(strip_html),
            }
        })
        .collect()
}

/// Reduces an HTML fragment to plain text: tags dropped, common entities
/// decoded, whitespace collapsed.
pub fn strip_html(html: &str) -> String {
    let mut text = String::with_capacity(html.len());
    let mut in_tag = false;

    for c in html.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => text.push(c),
            _ => {}
        }
    }

    text.replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
