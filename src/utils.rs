//! Utility functions for timestamps, text trimming, and URL checks.
//!
//! This module provides helper functions used throughout the application:
//! - The "last updated" timestamp in the page's fixed timezone
//! - Whitespace normalization and character-budget excerpts
//! - String truncation for logging
//! - Absolute URL validation for scraped images

use chrono::{DateTime, Duration, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Format `now` shifted by a fixed offset, e.g. `01 Jan 2025 at 05:30 AM IST`.
///
/// The offset is applied as a plain duration; there is no daylight-saving
/// adjustment.
///
/// # Arguments
///
/// * `now` - The current instant
/// * `offset_minutes` - Minutes to add to UTC (330 for IST)
/// * `zone_label` - Suffix naming the zone
pub fn generated_at(now: DateTime<Utc>, offset_minutes: i32, zone_label: &str) -> String {
    let shifted = now + Duration::minutes(i64::from(offset_minutes));
    format!("{} {}", shifted.format("%d %b %Y at %I:%M %p"), zone_label)
}

/// Collapse runs of whitespace (including newlines) to single spaces.
pub fn collapse_whitespace(s: &str) -> String {
    WHITESPACE.replace_all(s, " ").trim().to_string()
}

/// Cut `text` to at most `max_chars` characters, appending `...` when cut.
///
/// Counting is by `char`, so multi-byte text is never split mid-character.
pub fn excerpt(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        None => text.to_string(),
        Some((byte_idx, _)) => format!("{}...", text[..byte_idx].trim_end()),
    }
}

/// Truncate a string for logging purposes.
///
/// Long strings are cut to `max` characters with `"…(+N bytes)"` appended.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(truncate_for_log("short", 100), "short");
/// assert_eq!(truncate_for_log(&"a".repeat(500), 10), "aaaaaaaaaa…(+490 bytes)");
/// ```
pub fn truncate_for_log(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        None => s.to_string(),
        Some((byte_idx, _)) => format!("{}…(+{} bytes)", &s[..byte_idx], s.len() - byte_idx),
    }
}

/// True when `candidate` parses as an absolute `http` or `https` URL.
pub fn is_absolute_http_url(candidate: &str) -> bool {
    match Url::parse(candidate.trim()) {
        Ok(url) => matches!(url.scheme(), "http" | "https") && url.host_str().is_some(),
        Err(_) => false,
    }
}
