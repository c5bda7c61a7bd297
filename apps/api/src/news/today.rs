//! Same-day filtering of feed items.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone};
use serde::Serialize;
use tracing::debug;

use crate::news::cleaner::clean_headline;
use crate::news::client::FeedItem;

/// A feed item as returned by `GET /scrape`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewsItem {
    pub headline: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// The publish date exactly as the feed stated it.
    pub date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

/// Offset-less layouts some feeds emit. The wall-clock time is read in the
/// caller's zone.
const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

/// Parses a feed publish date into `tz`.
///
/// RFC 2822 first (the RSS norm), then RFC 3339, then the offset-less
/// `NAIVE_FORMATS` taken as local time in `tz`.
pub fn parse_pub_date<Tz: TimeZone>(raw: &str, tz: &Tz) -> Option<DateTime<Tz>> {
    let raw = raw.trim();
    let zoned = DateTime::parse_from_rfc2822(raw).or_else(|_| DateTime::parse_from_rfc3339(raw));
    if let Ok(dt) = zoned {
        return Some(dt.with_timezone(tz));
    }

    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .and_then(|naive| tz.from_local_datetime(&naive).earliest())
}

/// Keeps the items published on `today` as seen from `tz`, cleaning their titles.
///
/// Items with a missing or unparseable date, or without a title, are dropped.
/// Feed order is preserved.
pub fn todays_news<Tz: TimeZone>(items: Vec<FeedItem>, today: NaiveDate, tz: &Tz) -> Vec<NewsItem> {
    items
        .into_iter()
        .filter_map(|item| {
            let date = item.pub_date?;
            let published = match parse_pub_date(&date, tz) {
                Some(published) => published,
                None => {
                    debug!(date = %date, "Skipping feed item with unparseable date");
                    return None;
                }
            };
            if published.date_naive() != today {
                return None;
            }

            let title = item.title?;
            Some(NewsItem {
                headline: clean_headline(&title),
                url: item.link,
                date,
                content: item.content_snippet,
            })
        })
        .collect()
}
