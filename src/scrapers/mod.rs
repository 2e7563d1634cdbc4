//! Network-facing scrapers.
//!
//! | Module | Input | Output |
//! |--------|-------|--------|
//! | [`google_news`] | Google News RSS search URL | `Vec<FeedEntry>` in feed order |
//! | [`article`] | Each entry's article page | Lead image and summary per entry |
//!
//! Both share one `reqwest::Client` built from the run configuration, so every
//! request carries the same user-agent and timeout. Requests are issued one at
//! a time.

pub mod article;
pub mod google_news;
