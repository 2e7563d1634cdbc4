//! Data models for feed entries and the items rendered onto the page.
//!
//! This module defines the core data structures used throughout the application:
//! - [`FeedEntry`]: One headline as read from the syndication feed
//! - [`Enrichment`]: Lead image and summary scraped from the linked article
//! - [`EnrichedItem`]: A feed entry paired with its enrichment (real or placeholder)
//! - [`PageItem`]: Whatever ends up as a card on the page
//! - [`RenderContext`]: Everything the renderer needs for one run
//!
//! Nothing here outlives a single run.

use chrono::{DateTime, Utc};

/// Source label used when the feed does not name the publication.
pub const DEFAULT_SOURCE: &str = "News";

/// A single headline from the feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedEntry {
    /// The headline. Also the deduplication key.
    pub title: String,
    /// Destination of the rendered card.
    pub link: String,
    /// The originating publication, or [`DEFAULT_SOURCE`].
    pub source: String,
    /// Publication instant in UTC.
    pub published_at: DateTime<Utc>,
}

impl FeedEntry {
    /// Publication date truncated to the calendar day, e.g. `10 Dec 2025`.
    pub fn display_date(&self) -> String {
        self.published_at.format("%d %b %Y").to_string()
    }
}

/// Data scraped from an article page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enrichment {
    /// Absolute URL of the lead image, or the placeholder image.
    pub image_url: String,
    /// Short excerpt of the article body, or a fallback sentence.
    pub summary: String,
}

/// A feed entry with its image and summary always populated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrichedItem {
    pub entry: FeedEntry,
    pub enrichment: Enrichment,
}

/// One card on the rendered page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageItem {
    /// Headline-only card (enrichment disabled).
    Headline(FeedEntry),
    /// Card with lead image, summary and call to action.
    Enriched(EnrichedItem),
}

/// The ordered items plus the formatted "generated at" string.
#[derive(Debug, Clone)]
pub struct RenderContext {
    pub items: Vec<PageItem>,
    pub generated_at: String,
}
