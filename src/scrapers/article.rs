//! Article enrichment: lead image and summary scraped from the linked page.
//!
//! Each entry's link is fetched once with the shared client (fixed
//! user-agent and timeout). Any failure for one article, whether network,
//! HTTP status or parse, is logged and replaced by the placeholder pair. It
//! never aborts the run or touches other items.
//!
//! # Image lookup order
//!
//! 1. `<meta property="og:image">`
//! 2. `<meta name="twitter:image">`
//! 3. `<link rel="image_src">`
//! 4. JSON-LD `image` (string, list, or `ImageObject`)
//!
//! Only absolute `http(s)` URLs are accepted.

use crate::config::SiteConfig;
use crate::models::{EnrichedItem, Enrichment, FeedEntry};
use crate::utils::{collapse_whitespace, excerpt, is_absolute_http_url, truncate_for_log};
use futures::stream::{self, StreamExt};
use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use serde_json::Value;
use std::error::Error;
use tracing::{debug, info, instrument, warn};

static META_IMAGE: Lazy<Vec<(Selector, &'static str)>> = Lazy::new(|| {
    [
        (r#"meta[property="og:image"]"#, "content"),
        (r#"meta[name="og:image"]"#, "content"),
        (r#"meta[name="twitter:image"]"#, "content"),
        (r#"meta[property="twitter:image"]"#, "content"),
        (r#"link[rel="image_src"]"#, "href"),
    ]
    .into_iter()
    .map(|(css, attr)| (Selector::parse(css).unwrap(), attr))
    .collect()
});
static JSON_LD: Lazy<Selector> =
    Lazy::new(|| Selector::parse(r#"script[type="application/ld+json"]"#).unwrap());
static ARTICLE_PARAGRAPHS: Lazy<Selector> = Lazy::new(|| Selector::parse("article p").unwrap());
static PARAGRAPHS: Lazy<Selector> = Lazy::new(|| Selector::parse("p").unwrap());

/// Scrapes article pages for an image and summary.
#[derive(Debug, Clone)]
pub struct ArticleEnricher {
    client: reqwest::Client,
    summary_chars: usize,
    placeholder_image: String,
    fallback_summary: String,
    empty_text_summary: String,
}

impl ArticleEnricher {
    pub fn new(client: reqwest::Client, config: &SiteConfig) -> Self {
        Self {
            client,
            summary_chars: config.summary_chars,
            placeholder_image: config.placeholder_image.clone(),
            fallback_summary: config.fallback_summary.clone(),
            empty_text_summary: config.empty_text_summary.clone(),
        }
    }

    /// The pair substituted when an article cannot be fetched or parsed.
    pub fn placeholder(&self) -> Enrichment {
        Enrichment {
            image_url: self.placeholder_image.clone(),
            summary: self.fallback_summary.clone(),
        }
    }

    /// Enrich every entry, one at a time, in order.
    #[instrument(level = "info", skip_all, fields(count = entries.len()))]
    pub async fn enrich_all(&self, entries: Vec<FeedEntry>) -> Vec<EnrichedItem> {
        let outcomes: Vec<(EnrichedItem, bool)> = stream::iter(entries)
            .then(|entry| self.enrich_with_status(entry))
            .collect()
            .await;

        let placeholders = outcomes.iter().filter(|(_, fell_back)| *fell_back).count();
        info!(count = outcomes.len(), placeholders, "Enriched articles");
        outcomes.into_iter().map(|(item, _)| item).collect()
    }

    /// Enrich one entry. Never fails: errors become [`Self::placeholder`].
    pub async fn enrich(&self, entry: FeedEntry) -> EnrichedItem {
        self.enrich_with_status(entry).await.0
    }

    /// Like [`Self::enrich`], also reporting whether the placeholder was used.
    pub async fn enrich_with_status(&self, entry: FeedEntry) -> (EnrichedItem, bool) {
        info!(title = %truncate_for_log(&entry.title, 50), "Processing article");
        let (enrichment, fell_back) = match self.try_enrich(&entry.link).await {
            Ok(enrichment) => (enrichment, false),
            Err(e) => {
                warn!(url = %entry.link, error = %e, "Article enrichment failed; using placeholder");
                (self.placeholder(), true)
            }
        };
        (EnrichedItem { entry, enrichment }, fell_back)
    }

    #[instrument(level = "debug", skip(self))]
    async fn try_enrich(&self, url: &str) -> Result<Enrichment, Box<dyn Error>> {
        let body = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        Ok(self.extract(&body))
    }

    /// Build the enrichment from an article's HTML.
    pub fn extract(&self, html: &str) -> Enrichment {
        let document = Html::parse_document(html);

        let image_url = extract_image(&document).unwrap_or_else(|| {
            debug!("No usable lead image; using placeholder");
            self.placeholder_image.clone()
        });

        let text = extract_text(&document);
        let summary = if text.is_empty() {
            self.empty_text_summary.clone()
        } else {
            excerpt(&text, self.summary_chars)
        };

        Enrichment { image_url, summary }
    }
}

/// Find the lead image URL, if any candidate is an absolute URL.
pub fn extract_image(document: &Html) -> Option<String> {
    let from_meta = META_IMAGE.iter().find_map(|(selector, attr)| {
        document
            .select(selector)
            .filter_map(|el| el.value().attr(attr))
            .map(str::trim)
            .find(|candidate| is_absolute_http_url(candidate))
            .map(str::to_string)
    });

    from_meta.or_else(|| {
        document.select(&JSON_LD).find_map(|script| {
            let raw = script.text().collect::<String>();
            let value: Value = serde_json::from_str(&raw).ok()?;
            json_ld_image(&value)
        })
    })
}

/// Dig an image URL out of a JSON-LD document (`@graph` and lists included).
fn json_ld_image(value: &Value) -> Option<String> {
    match value {
        Value::Array(nodes) => nodes.iter().find_map(json_ld_image),
        Value::Object(map) => map
            .get("image")
            .and_then(image_url)
            .or_else(|| map.get("url").filter(|_| is_image_object(map)).and_then(image_url))
            .or_else(|| map.get("@graph").and_then(json_ld_image)),
        _ => None,
    }
}

/// Resolve the value of an `image` property: a URL, a list, or an object with `url`.
fn image_url(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if is_absolute_http_url(s) => Some(s.trim().to_string()),
        Value::Array(images) => images.iter().find_map(image_url),
        Value::Object(map) => ["url", "contentUrl"]
            .iter()
            .find_map(|key| map.get(*key).and_then(image_url)),
        _ => None,
    }
}

/// `@type` is `ImageObject`, alone or in a list.
fn is_image_object(map: &serde_json::Map<String, Value>) -> bool {
    match map.get("@type") {
        Some(Value::String(t)) => t == "ImageObject",
        Some(Value::Array(types)) => types.iter().any(|t| t == "ImageObject"),
        _ => false,
    }
}

/// Paragraph text of the article body, whitespace-collapsed.
///
/// Paragraphs inside `<article>` win; otherwise every `<p>` on the page.
pub fn extract_text(document: &Html) -> String {
    let mut paragraphs: Vec<String> = document
        .select(&ARTICLE_PARAGRAPHS)
        .map(|p| collapse_whitespace(&p.text().collect::<Vec<_>>().join(" ")))
        .filter(|p| !p.is_empty())
        .collect();

    if paragraphs.is_empty() {
        paragraphs = document
            .select(&PARAGRAPHS)
            .map(|p| collapse_whitespace(&p.text().collect::<Vec<_>>().join(" ")))
            .filter(|p| !p.is_empty())
            .collect();
    }

    paragraphs.join(" ")
}
