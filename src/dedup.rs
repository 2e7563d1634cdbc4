//! Title deduplication and the item cap.
//!
//! Google News often lists the same wire story several times. Only the first
//! occurrence of a title (byte-exact, case-sensitive) is kept, feed order is
//! preserved, and later duplicates are dropped rather than merged.

use crate::models::FeedEntry;
use itertools::Itertools;
use tracing::{debug, instrument};

/// Keep the first entry for each distinct title.
pub fn dedupe_titles(entries: Vec<FeedEntry>) -> Vec<FeedEntry> {
    entries
        .into_iter()
        .unique_by(|e| e.title.clone())
        .collect()
}

/// Deduplicate, then truncate to `cap` entries when a cap is given.
#[instrument(level = "info", skip_all, fields(input = entries.len(), ?cap))]
pub fn select_items(entries: Vec<FeedEntry>, cap: Option<usize>) -> Vec<FeedEntry> {
    let mut unique = dedupe_titles(entries);
    let unique_count = unique.len();
    if let Some(cap) = cap {
        unique.truncate(cap);
    }
    debug!(unique = unique_count, kept = unique.len(), "Selected feed entries");
    unique
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn entry(title: &str, link: &str) -> FeedEntry {
        FeedEntry {
            title: title.to_string(),
            link: link.to_string(),
            source: "News".to_string(),
            published_at: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    fn titles(entries: &[FeedEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.title.as_str()).collect()
    }

    #[test]
    fn test_first_occurrence_wins() {
        let out = dedupe_titles(vec![
            entry("A", "https://x/1"),
            entry("B", "https://x/2"),
            entry("A", "https://x/3"),
        ]);
        assert_eq!(titles(&out), vec!["A", "B"]);
        assert_eq!(out[0].link, "https://x/1");
    }

    #[test]
    fn test_order_preserved() {
        let out = dedupe_titles(vec![
            entry("C", "1"),
            entry("A", "2"),
            entry("C", "3"),
            entry("B", "4"),
            entry("A", "5"),
        ]);
        assert_eq!(titles(&out), vec!["C", "A", "B"]);
    }

    #[test]
    fn test_case_sensitive() {
        let out = dedupe_titles(vec![entry("Fab news", "1"), entry("fab news", "2")]);
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn test_idempotent() {
        let shapes: Vec<Vec<FeedEntry>> = vec![
            vec![
                entry("A", "1"),
                entry("A", "2"),
                entry("B", "3"),
                entry("C", "4"),
                entry("B", "5"),
            ],
            vec![entry("Same", "1"), entry("Same", "2"), entry("Same", "3")],
            vec![entry("X", "1"), entry("Y", "2"), entry("Z", "3")],
            vec![entry("x", "1"), entry("X", "2"), entry("x ", "3"), entry("x", "4")],
            vec![entry("Solo", "1")],
            Vec::new(),
        ];

        for input in shapes {
            let once = dedupe_titles(input.clone());
            let twice = dedupe_titles(once.clone());
            assert_eq!(once, twice);
            assert!(once.len() <= input.len());
        }
    }

    #[test]
    fn test_all_duplicates_collapse_to_first() {
        let out = dedupe_titles(vec![entry("Same", "1"), entry("Same", "2"), entry("Same", "3")]);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].link, "1");
    }

    #[test]
    fn test_unique_input_is_fixed_point() {
        let input = vec![entry("X", "1"), entry("Y", "2"), entry("Z", "3")];
        assert_eq!(dedupe_titles(input.clone()), input);
    }

    #[test]
    fn test_cap_applies_after_dedup() {
        let mut input = Vec::new();
        for i in 0..20 {
            input.push(entry(&format!("T{i}"), "l"));
            input.push(entry(&format!("T{i}"), "dup"));
        }
        let out = select_items(input, Some(15));
        assert_eq!(out.len(), 15);
        assert_eq!(out[14].title, "T14");
        assert!(out.iter().all(|e| e.link == "l"));
    }

    #[test]
    fn test_no_cap_keeps_everything_unique() {
        let input = (0..20).map(|i| entry(&format!("T{i}"), "l")).collect();
        assert_eq!(select_items(input, None).len(), 20);
    }

    #[test]
    fn test_empty_input() {
        assert!(select_items(Vec::new(), Some(15)).is_empty());
    }
}
