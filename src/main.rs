//! # Semicon Daily
//!
//! Rebuilds a static HTML briefing of the last day's India semiconductor
//! headlines from the Google News RSS search feed.
//!
//! ## Usage
//!
//! ```sh
//! semicon_daily                      # writes ./index.html
//! semicon_daily --no-enrich -o public/index.html
//! ```
//!
//! ## Architecture
//!
//! Each run is a full, independent rebuild:
//! 1. **Fetching**: Download and parse the feed (failure degrades to no items)
//! 2. **Deduplication**: Keep the first entry per title; cap when enriching
//! 3. **Enrichment**: Scrape each article for a lead image and summary, one at a time
//! 4. **Rendering**: Fill the fixed HTML template
//! 5. **Output**: Overwrite the page on disk

use chrono::Utc;
use clap::Parser;
use std::error::Error;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod cli;
mod config;
mod dedup;
mod models;
mod outputs;
mod pipeline;
mod scrapers;
mod utils;

use cli::Cli;
use config::SiteConfig;
use outputs::site::write_page;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("semicon_daily starting up");

    let args = Cli::parse();
    debug!(?args, "Parsed CLI arguments");

    let config = SiteConfig::resolve(&args).await?;
    info!(
        feed_url = %config.feed.url(),
        enrich = config.enrich,
        max_items = config.max_items,
        output = %config.output_path,
        "Configuration resolved"
    );

    let client = config.http_client()?;
    let html = pipeline::build_page(&config, &client, Utc::now()).await;

    write_page(&config.output_path, &html).await?;

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        secs = elapsed.as_secs(),
        millis = elapsed.subsec_millis(),
        "Execution complete"
    );

    Ok(())
}
