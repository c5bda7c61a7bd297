// News feed ingestion: fetch the RSS source, keep today's items, clean headlines.
// All outbound feed traffic goes through the `FeedSource` trait.

pub mod cleaner;
pub mod client;
pub mod handlers;
pub mod today;

pub use cleaner::clean_headline;
pub use client::{FeedError, FeedSource, RssFeedClient};
pub use today::{todays_news, NewsItem};
