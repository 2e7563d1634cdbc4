//! Google News RSS feed fetcher.
//!
//! Downloads the search feed built by [`crate::config::FeedQuery`] and turns
//! each `<item>` into a [`FeedEntry`], in the order the feed lists them.
//!
//! # Item shape
//!
//! ```xml
//! <item>
//!   <title>Fab Opens in Gujarat - Reuters</title>
//!   <link>https://news.google.com/rss/articles/...</link>
//!   <pubDate>Wed, 10 Dec 2025 08:00:00 GMT</pubDate>
//!   <source url="https://www.reuters.com">Reuters</source>
//! </item>
//! ```

use crate::models::{DEFAULT_SOURCE, FeedEntry};
use chrono::{DateTime, Utc};
use quick_xml::de::from_str;
use serde::Deserialize;
use std::error::Error;
use tracing::{debug, info, instrument, warn};

#[derive(Debug, Deserialize)]
struct Rss {
    channel: Channel,
}

#[derive(Debug, Deserialize)]
struct Channel {
    #[serde(rename = "item", default)]
    item: Vec<Item>,
}

#[derive(Debug, Deserialize)]
struct Item {
    title: Option<String>,
    link: Option<String>,
    #[serde(rename = "pubDate")]
    pub_date: Option<String>,
    source: Option<Source>,
}

#[derive(Debug, Deserialize)]
struct Source {
    #[serde(rename = "$text", default)]
    name: String,
}

/// Parse an RFC 2822 `pubDate` into UTC.
fn parse_pub_date(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc2822(raw.trim())
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Parse an RSS 2.0 document into feed entries.
///
/// Items without a title or link are skipped. A missing `<source>` becomes
/// [`DEFAULT_SOURCE`]; a missing or unreadable `pubDate` becomes `now`.
pub fn parse_feed(xml: &str, now: DateTime<Utc>) -> Result<Vec<FeedEntry>, Box<dyn Error>> {
    let rss: Rss = from_str(xml)?;
    let mut entries = Vec::with_capacity(rss.channel.item.len());

    for item in rss.channel.item {
        let title = item.title.as_deref().unwrap_or_default().trim().to_string();
        let link = item.link.as_deref().unwrap_or_default().trim().to_string();
        if title.is_empty() || link.is_empty() {
            debug!(%title, %link, "Skipping feed item without title or link");
            continue;
        }

        let source = item
            .source
            .map(|s| s.name.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_SOURCE.to_string());

        let published_at = match item.pub_date.as_deref().and_then(parse_pub_date) {
            Some(dt) => dt,
            None => {
                debug!(%title, raw = ?item.pub_date, "Unreadable pubDate; using run time");
                now
            }
        };

        entries.push(FeedEntry {
            title,
            link,
            source,
            published_at,
        });
    }

    Ok(entries)
}

/// Download and parse the feed.
#[instrument(level = "info", skip_all, fields(%url))]
pub async fn fetch_feed(
    client: &reqwest::Client,
    url: &str,
    now: DateTime<Utc>,
) -> Result<Vec<FeedEntry>, Box<dyn Error>> {
    let body = client
        .get(url)
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;
    let entries = parse_feed(&body, now)?;
    info!(count = entries.len(), "Fetched feed entries");
    Ok(entries)
}

/// Fetch the feed, degrading any failure to zero entries.
///
/// A failed fetch is logged at WARN so it can be told apart from a feed
/// that simply had no news.
pub async fn fetch_feed_or_empty(
    client: &reqwest::Client,
    url: &str,
    now: DateTime<Utc>,
) -> Vec<FeedEntry> {
    match fetch_feed(client, url, now).await {
        Ok(entries) => {
            if entries.is_empty() {
                info!(%url, "Feed returned no entries");
            }
            entries
        }
        Err(e) => {
            warn!(%url, error = %e, "Feed fetch failed; continuing with no entries");
            Vec::new()
        }
    }
}
