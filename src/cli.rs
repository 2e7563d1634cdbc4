//! Command-line interface definitions for Semicon Daily.
//!
//! No argument is required: a bare invocation rebuilds `index.html` from the
//! built-in configuration. Flags only override individual settings.

use clap::Parser;

/// Command-line arguments for the Semicon Daily page builder.
///
/// # Examples
///
/// ```sh
/// # Rebuild ./index.html with the defaults
/// semicon_daily
///
/// # Headline-only page written elsewhere
/// semicon_daily --no-enrich -o public/index.html
///
/// # Settings from a YAML file
/// semicon_daily -c site.yaml
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Optional path to a YAML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Output path for the generated HTML page
    #[arg(short, long)]
    pub output: Option<String>,

    /// Fetch this feed URL instead of the configured Google News query
    #[arg(long)]
    pub feed_url: Option<String>,

    /// Maximum number of articles to enrich and render
    #[arg(long)]
    pub max_items: Option<usize>,

    /// Render headlines only, without scraping article pages
    #[arg(long)]
    pub no_enrich: bool,
}
