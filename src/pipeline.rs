//! One page build: fetch → deduplicate → (enrich) → render.
//!
//! Everything runs sequentially on the caller's task. Writing the result is
//! left to the caller.

use crate::config::SiteConfig;
use crate::dedup::select_items;
use crate::models::{FeedEntry, PageItem, RenderContext};
use crate::outputs::html::render_page;
use crate::scrapers::article::ArticleEnricher;
use crate::scrapers::google_news::fetch_feed_or_empty;
use crate::utils::generated_at;
use chrono::{DateTime, Utc};
use tracing::{info, instrument};

/// Turn raw feed entries into page items according to `config`.
///
/// With enrichment on, entries are capped to `max_items` before any article
/// is fetched.
pub async fn prepare_items(
    entries: Vec<FeedEntry>,
    config: &SiteConfig,
    client: &reqwest::Client,
) -> Vec<PageItem> {
    let selected = select_items(entries, config.item_cap());

    if config.enrich {
        let enricher = ArticleEnricher::new(client.clone(), config);
        enricher
            .enrich_all(selected)
            .await
            .into_iter()
            .map(PageItem::Enriched)
            .collect()
    } else {
        selected.into_iter().map(PageItem::Headline).collect()
    }
}

/// Build the complete HTML document for the instant `now`.
#[instrument(level = "info", skip_all, fields(enrich = config.enrich))]
pub async fn build_page(config: &SiteConfig, client: &reqwest::Client, now: DateTime<Utc>) -> String {
    let feed_url = config.feed.url();
    let entries = fetch_feed_or_empty(client, &feed_url, now).await;
    let fetched = entries.len();

    let items = prepare_items(entries, config, client).await;
    info!(fetched, rendered = items.len(), "Prepared page items");

    let ctx = RenderContext {
        items,
        generated_at: generated_at(now, config.utc_offset_minutes, &config.zone_label),
    };
    render_page(&ctx, &config.page)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outputs::html::EMPTY_STATE_MESSAGE;
    use chrono::TimeZone;
    use httpmock::prelude::*;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap()
    }

    fn feed_xml(base: &str, count: usize) -> String {
        let mut items = String::new();
        for i in 0..count {
            items.push_str(&format!(
                "<item><title>Headline {i}</title><link>{base}/article/{i}</link>\
                 <pubDate>Tue, 31 Dec 2024 10:00:00 GMT</pubDate>\
                 <source url=\"https://example.com\">Source {i}</source></item>"
            ));
        }
        format!(r#"<rss version="2.0"><channel><title>t</title>{items}</channel></rss>"#)
    }

    fn config_for(server: &MockServer) -> SiteConfig {
        let mut config = SiteConfig::default();
        config.feed.url = Some(server.url("/feed"));
        config.timeout_secs = 5;
        config
    }

    #[tokio::test]
    async fn test_cap_enforced_when_enriching() {
        let server = MockServer::start_async().await;
        let xml = feed_xml(&server.base_url(), 20);
        server
            .mock_async(|when, then| {
                when.method(GET).path("/feed");
                then.status(200).body(xml);
            })
            .await;
        let article_mock = server
            .mock_async(|when, then| {
                when.method(GET).path_contains("/article/");
                then.status(200)
                    .body("<html><body><article><p>Body text.</p></article></body></html>");
            })
            .await;

        let config = config_for(&server);
        let client = config.http_client().unwrap();
        let html = build_page(&config, &client, now()).await;

        article_mock.assert_hits_async(15).await;
        assert_eq!(html.matches(r#"class="news-card""#).count(), 15);
        assert!(html.contains("Headline 14"));
        assert!(!html.contains("Headline 15"));
        assert!(html.contains("Last updated: 01 Jan 2025 at 05:30 AM IST"));
    }

    #[tokio::test]
    async fn test_headline_variant_is_uncapped() {
        let server = MockServer::start_async().await;
        let xml = feed_xml(&server.base_url(), 20);
        server
            .mock_async(|when, then| {
                when.method(GET).path("/feed");
                then.status(200).body(xml);
            })
            .await;
        let article_mock = server
            .mock_async(|when, then| {
                when.method(GET).path_contains("/article/");
                then.status(200).body("<html></html>");
            })
            .await;

        let mut config = config_for(&server);
        config.enrich = false;
        let client = config.http_client().unwrap();
        let html = build_page(&config, &client, now()).await;

        article_mock.assert_hits_async(0).await;
        assert_eq!(html.matches(r#"class="news-card""#).count(), 20);
        assert!(html.contains("31 Dec 2024"));
    }

    #[tokio::test]
    async fn test_feed_failure_renders_empty_state() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/feed");
                then.status(500);
            })
            .await;

        let config = config_for(&server);
        let client = config.http_client().unwrap();
        let html = build_page(&config, &client, now()).await;

        assert!(html.contains(EMPTY_STATE_MESSAGE));
        assert!(!html.contains(r#"class="news-card""#));
    }

    #[tokio::test]
    async fn test_failed_article_gets_placeholder_only_for_itself() {
        let server = MockServer::start_async().await;
        let xml = feed_xml(&server.base_url(), 3);
        server
            .mock_async(|when, then| {
                when.method(GET).path("/feed");
                then.status(200).body(xml);
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/article/1");
                then.status(404);
            })
            .await;
        for path in ["/article/0", "/article/2"] {
            server
                .mock_async(|when, then| {
                    when.method(GET).path(path);
                    then.status(200).body(
                        r#"<html><head><meta property="og:image" content="https://cdn.example.com/x.jpg"></head>
                        <body><p>Real summary.</p></body></html>"#,
                    );
                })
                .await;
        }

        let config = config_for(&server);
        let items = prepare_items(
            crate::scrapers::google_news::parse_feed(&feed_xml(&server.base_url(), 3), now())
                .unwrap(),
            &config,
            &config.http_client().unwrap(),
        )
        .await;

        let enriched: Vec<_> = items
            .iter()
            .map(|item| match item {
                PageItem::Enriched(e) => e.enrichment.clone(),
                PageItem::Headline(_) => panic!("expected enriched items"),
            })
            .collect();

        assert_eq!(enriched[0].summary, "Real summary.");
        assert_eq!(enriched[1].image_url, config.placeholder_image);
        assert_eq!(enriched[1].summary, config.fallback_summary);
        assert_eq!(enriched[2].image_url, "https://cdn.example.com/x.jpg");
    }

    #[tokio::test]
    async fn test_duplicate_titles_rendered_once() {
        let server = MockServer::start_async().await;
        let xml = format!(
            r#"<rss version="2.0"><channel>
            <item><title>Same</title><link>{0}/article/a</link></item>
            <item><title>Same</title><link>{0}/article/b</link></item>
            </channel></rss>"#,
            server.base_url()
        );
        server
            .mock_async(|when, then| {
                when.method(GET).path("/feed");
                then.status(200).body(xml);
            })
            .await;

        let mut config = config_for(&server);
        config.enrich = false;
        let client = config.http_client().unwrap();
        let html = build_page(&config, &client, now()).await;

        assert_eq!(html.matches(r#"class="news-card""#).count(), 1);
        assert!(html.contains("/article/a"));
        assert!(!html.contains("/article/b"));
    }
}
