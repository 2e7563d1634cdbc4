//! Run configuration.
//!
//! Every value the page build depends on (feed query, item cap, fetch
//! identity, placeholders, template text, timezone) lives in [`SiteConfig`].
//! Defaults reproduce the India semiconductor briefing with no inputs at all;
//! an optional YAML file and CLI flags can override individual fields.
//!
//! # Example YAML
//!
//! ```yaml
//! max_items: 10
//! enrich: false
//! feed:
//!   keywords: ["Semiconductor", "OSAT"]
//!   lookback: 12h
//! ```

use crate::cli::Cli;
use serde::Deserialize;
use std::error::Error;
use std::time::Duration;
use tracing::{info, instrument};

/// The Google News search query the feed is built from.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct FeedQuery {
    /// Full feed URL used verbatim instead of building one.
    pub url: Option<String>,
    pub base_url: String,
    /// Term that must appear alongside any keyword.
    pub anchor: String,
    /// Topic terms, OR-combined.
    pub keywords: Vec<String>,
    /// Recency window in Google News `when:` syntax (`1d`, `12h`).
    pub lookback: String,
    pub hl: String,
    pub gl: String,
    pub ceid: String,
}

impl Default for FeedQuery {
    fn default() -> Self {
        Self {
            url: None,
            base_url: "https://news.google.com/rss/search".to_string(),
            anchor: "India".to_string(),
            keywords: vec![
                "Semiconductor".to_string(),
                "Chip Manufacturing".to_string(),
                "Fab".to_string(),
                "Wafer".to_string(),
                "ISM".to_string(),
            ],
            lookback: "1d".to_string(),
            hl: "en-IN".to_string(),
            gl: "IN".to_string(),
            ceid: "IN:en".to_string(),
        }
    }
}

impl FeedQuery {
    /// The search expression, e.g. `India (Semiconductor OR Fab) when:1d`.
    pub fn search_terms(&self) -> String {
        let mut terms = self.anchor.clone();
        if !self.keywords.is_empty() {
            terms.push_str(&format!(" ({})", self.keywords.join(" OR ")));
        }
        if !self.lookback.is_empty() {
            terms.push_str(&format!(" when:{}", self.lookback));
        }
        terms.trim().to_string()
    }

    /// The feed URL to fetch.
    pub fn url(&self) -> String {
        if let Some(url) = &self.url {
            return url.clone();
        }
        format!(
            "{}?q={}&hl={}&gl={}&ceid={}",
            self.base_url,
            urlencoding::encode(&self.search_terms()),
            urlencoding::encode(&self.hl),
            urlencoding::encode(&self.gl),
            urlencoding::encode(&self.ceid),
        )
    }
}

/// Fixed text of the page template.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct PageText {
    pub html_title: String,
    pub heading: String,
    pub subtitle: String,
    pub footer: String,
}

impl Default for PageText {
    fn default() -> Self {
        Self {
            html_title: "India Semiconductor Briefing".to_string(),
            heading: "🇮🇳 India Semicon Daily".to_string(),
            subtitle: "Your daily briefing on India's semiconductor ambition.".to_string(),
            footer: "Automated by GitHub Actions. Data sourced from Google News.".to_string(),
        }
    }
}

/// Everything a run needs, resolved once at startup.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct SiteConfig {
    pub feed: FeedQuery,
    /// Scrape each article for an image and summary.
    pub enrich: bool,
    /// Item cap. Only applied when `enrich` is set.
    pub max_items: usize,
    pub user_agent: String,
    pub timeout_secs: u64,
    /// Character budget of a scraped summary.
    pub summary_chars: usize,
    pub placeholder_image: String,
    /// Summary used when the article fetch or parse fails.
    pub fallback_summary: String,
    /// Summary used when the article has no extractable text.
    pub empty_text_summary: String,
    pub page: PageText,
    /// Offset of the displayed "last updated" time from UTC.
    pub utc_offset_minutes: i32,
    pub zone_label: String,
    pub output_path: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            feed: FeedQuery::default(),
            enrich: true,
            max_items: 15,
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                         (KHTML, like Gecko) Chrome/120.0 Safari/537.36"
                .to_string(),
            timeout_secs: 10,
            summary_chars: 250,
            placeholder_image: "https://placehold.co/600x300/1e1e1e/64b5f6?text=India+Semicon"
                .to_string(),
            fallback_summary: "Summary unavailable. Click through to read the full story."
                .to_string(),
            empty_text_summary: "Click the link to read the full story.".to_string(),
            page: PageText::default(),
            utc_offset_minutes: 330,
            zone_label: "IST".to_string(),
            output_path: "index.html".to_string(),
        }
    }
}

impl SiteConfig {
    /// Parse a YAML overlay. Missing fields keep their defaults.
    pub fn from_yaml(yaml: &str) -> Result<Self, Box<dyn Error>> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Defaults, then the YAML file named by `--config`, then CLI flags.
    #[instrument(level = "info", skip_all)]
    pub async fn resolve(cli: &Cli) -> Result<Self, Box<dyn Error>> {
        let mut config = match &cli.config {
            Some(path) => {
                let yaml = tokio::fs::read_to_string(path).await?;
                info!(%path, "Loaded configuration file");
                Self::from_yaml(&yaml)?
            }
            None => Self::default(),
        };
        config.apply_cli(cli);
        Ok(config)
    }

    pub fn apply_cli(&mut self, cli: &Cli) {
        if let Some(output) = &cli.output {
            self.output_path = output.clone();
        }
        if let Some(url) = &cli.feed_url {
            self.feed.url = Some(url.clone());
        }
        if let Some(max) = cli.max_items {
            self.max_items = max;
        }
        if cli.no_enrich {
            self.enrich = false;
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// The cap to apply after deduplication, if any.
    pub fn item_cap(&self) -> Option<usize> {
        self.enrich.then_some(self.max_items)
    }

    /// Shared HTTP client carrying the configured identity and timeout.
    pub fn http_client(&self) -> Result<reqwest::Client, Box<dyn Error>> {
        Ok(reqwest::Client::builder()
            .user_agent(self.user_agent.clone())
            .timeout(self.timeout())
            .build()?)
    }
}
