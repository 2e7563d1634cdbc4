//! Static HTML page rendering.
//!
//! [`render_page`] turns a [`RenderContext`] into one self-contained document:
//! inline CSS, the Inter web font, and no scripts. Layout:
//!
//! ```text
//! header  heading, subtitle, "Last updated: <generated_at>"
//! main    one card per item, or the empty-state block
//! footer  attribution
//! ```
//!
//! Item text and URLs come from the feed and from scraped pages, so all of it
//! is HTML-escaped before interpolation.

use crate::config::PageText;
use crate::models::{EnrichedItem, FeedEntry, PageItem, RenderContext};
use html_escape::{encode_double_quoted_attribute, encode_text};
use std::fmt::Write;

/// Shown in place of cards when there are no items.
pub const EMPTY_STATE_MESSAGE: &str = "No major headlines found in the last 24 hours.";
const EMPTY_STATE_HINT: &str = "The sector is quiet today. Check back tomorrow!";
const CALL_TO_ACTION: &str = "Read full story &rarr;";

const STYLE: &str = r#"    <style>
        @import url('https://fonts.googleapis.com/css2?family=Inter:wght@400;600;700&display=swap');

        :root {
            --bg-body: #121212;
            --bg-card: #1e1e1e;
            --text-primary: #ffffff;
            --text-secondary: #a0a0a0;
            --accent-color: #64b5f6;
        }

        body {
            font-family: 'Inter', -apple-system, BlinkMacSystemFont, sans-serif;
            background-color: var(--bg-body);
            color: var(--text-primary);
            margin: 0;
            padding: 20px;
            line-height: 1.5;
        }

        .container { max-width: 700px; margin: 40px auto; }
        header { text-align: center; margin-bottom: 40px; }
        h1 { font-size: 2.5rem; font-weight: 700; margin: 0; letter-spacing: -0.5px; }
        .subtitle { color: var(--text-secondary); font-size: 1rem; margin-top: 10px; }

        .update-time {
            display: inline-block;
            background: #2c2c2c;
            padding: 6px 12px;
            border-radius: 20px;
            font-size: 0.85rem;
            color: var(--text-secondary);
            margin-top: 15px;
        }

        .news-grid { display: grid; gap: 20px; }

        .news-card {
            background-color: var(--bg-card);
            border-radius: 12px;
            padding: 20px;
            text-decoration: none;
            color: inherit;
            display: block;
            transition: all 0.2s ease-in-out;
            border: 1px solid #333;
            overflow: hidden;
        }

        .news-card:hover {
            transform: translateY(-3px);
            background-color: #252525;
            border-color: var(--accent-color);
            box-shadow: 0 10px 20px rgba(0,0,0,0.2);
        }

        .card-image {
            display: block;
            width: calc(100% + 40px);
            height: 200px;
            object-fit: cover;
            margin: -20px -20px 16px -20px;
            background: #2c2c2c;
        }

        .card-meta {
            display: flex;
            justify-content: space-between;
            margin-bottom: 12px;
            font-size: 0.85rem;
            color: var(--text-secondary);
        }

        .source-tag {
            font-weight: 600;
            color: var(--accent-color);
            text-transform: uppercase;
            letter-spacing: 0.5px;
        }

        .card-title {
            font-size: 1.25rem;
            font-weight: 600;
            margin: 0;
            line-height: 1.4;
            display: -webkit-box;
            -webkit-line-clamp: 3;
            -webkit-box-orient: vertical;
            overflow: hidden;
        }

        .card-title a { color: inherit; text-decoration: none; }
        .card-summary { color: var(--text-secondary); font-size: 0.95rem; margin: 12px 0; }
        .read-more { color: var(--accent-color); font-weight: 600; text-decoration: none; font-size: 0.9rem; }

        .empty-state {
            text-align: center;
            padding: 40px;
            color: var(--text-secondary);
            font-size: 1.1rem;
            background: var(--bg-card);
            border-radius: 12px;
        }

        footer { text-align: center; margin-top: 50px; color: #555; font-size: 0.85rem; }
        footer a { color: #777; text-decoration: none; }
    </style>
"#;

fn write_headline_card(html: &mut String, entry: &FeedEntry) {
    writeln!(
        html,
        r#"            <a href="{link}" target="_blank" rel="noopener" class="news-card">
                <div class="card-meta">
                    <span class="source-tag">{source}</span>
                    <span>{date}</span>
                </div>
                <h2 class="card-title">{title}</h2>
            </a>"#,
        link = encode_double_quoted_attribute(&entry.link),
        source = encode_text(&entry.source),
        date = entry.display_date(),
        title = encode_text(&entry.title),
    )
    .unwrap();
}

fn write_enriched_card(html: &mut String, item: &EnrichedItem) {
    let entry = &item.entry;
    let link = encode_double_quoted_attribute(&entry.link);
    writeln!(
        html,
        r#"            <article class="news-card">
                <img class="card-image" src="{image}" alt="" loading="lazy">
                <div class="card-meta">
                    <span class="source-tag">{source}</span>
                    <span>{date}</span>
                </div>
                <h2 class="card-title"><a href="{link}" target="_blank" rel="noopener">{title}</a></h2>
                <p class="card-summary">{summary}</p>
                <a class="read-more" href="{link}" target="_blank" rel="noopener">{cta}</a>
            </article>"#,
        image = encode_double_quoted_attribute(&item.enrichment.image_url),
        source = encode_text(&entry.source),
        date = entry.display_date(),
        link = link,
        title = encode_text(&entry.title),
        summary = encode_text(&item.enrichment.summary),
        cta = CALL_TO_ACTION,
    )
    .unwrap();
}

fn write_empty_state(html: &mut String) {
    writeln!(
        html,
        r#"            <div class="empty-state">
                <p>{EMPTY_STATE_MESSAGE}</p>
                <p style="font-size: 0.9rem">{EMPTY_STATE_HINT}</p>
            </div>"#
    )
    .unwrap();
}

/// Render the complete page.
///
/// Output depends only on `ctx` and `text`; the timestamp arrives
/// pre-formatted in `ctx.generated_at`.
pub fn render_page(ctx: &RenderContext, text: &PageText) -> String {
    let mut html = String::with_capacity(8 * 1024 + ctx.items.len() * 1024);

    writeln!(
        html,
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
{STYLE}</head>
<body>
    <div class="container">
        <header>
            <h1>{heading}</h1>
            <div class="subtitle">{subtitle}</div>
            <div class="update-time">Last updated: {generated_at}</div>
        </header>

        <main class="news-grid">"#,
        title = encode_text(&text.html_title),
        heading = encode_text(&text.heading),
        subtitle = encode_text(&text.subtitle),
        generated_at = encode_text(&ctx.generated_at),
    )
    .unwrap();

    if ctx.items.is_empty() {
        write_empty_state(&mut html);
    } else {
        for item in &ctx.items {
            match item {
                PageItem::Headline(entry) => write_headline_card(&mut html, entry),
                PageItem::Enriched(item) => write_enriched_card(&mut html, item),
            }
        }
    }

    writeln!(
        html,
        r#"        </main>
        <footer>
            <p>{footer}</p>
        </footer>
    </div>
</body>
</html>"#,
        footer = encode_text(&text.footer),
    )
    .unwrap();

    html
}
