//! Utility functions for log formatting and headline presentation.
//!
//! This module provides helper functions used throughout the application:
//! - String truncation for logging response bodies
//! - Relative "time ago" labels for publication timestamps
//! - The author/category info line shown under each headline

use crate::models::NewsItem;
use chrono::{DateTime, NaiveDateTime, Utc};
use tracing::warn;

/// Timestamp layout of `webPublicationDate`.
pub const PUBLICATION_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Truncate a string for logging purposes.
///
/// Long strings are truncated to at most `max` bytes (on a character
/// boundary) with an ellipsis and byte count indicator appended.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(truncate_for_log("short", 100), "short");
/// assert_eq!(truncate_for_log(&"a".repeat(500), 10), "aaaaaaaaaa…(+490 bytes)");
/// ```
pub fn truncate_for_log(s: &str, max: usize) -> String {
    if s.len() <= max {
        return s.to_string();
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}…(+{} bytes)", &s[..end], s.len() - end)
}

/// Parse a `yyyy-MM-ddTHH:mm:ssZ` timestamp.
pub fn parse_publication_date(date: &str) -> Option<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(date, PUBLICATION_DATE_FORMAT)
        .ok()
        .map(|naive| naive.and_utc())
}

fn plural(n: i64, unit: &str) -> String {
    if n == 1 {
        format!("1 {unit}")
    } else {
        format!("{n} {unit}s")
    }
}

/// Describe `published` relative to `now` at minute resolution.
///
/// - under an hour: `"5 minutes ago"`
/// - under a day: `"3 hours ago"`
/// - under a week: `"Yesterday"` or `"4 days ago"`
/// - otherwise the date, e.g. `"Jan 5, 2020"`
///
/// Future timestamps read `"In 5 minutes"` and so on.
pub fn relative_time(published: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let delta = now.signed_duration_since(published);
    let future = delta.num_seconds() < 0;
    let delta = delta.abs();

    let span = if delta.num_minutes() < 60 {
        plural(delta.num_minutes(), "minute")
    } else if delta.num_hours() < 24 {
        plural(delta.num_hours(), "hour")
    } else if delta.num_days() < 7 {
        match (delta.num_days(), future) {
            (1, false) => return "Yesterday".to_string(),
            (1, true) => return "Tomorrow".to_string(),
            (days, _) => plural(days, "day"),
        }
    } else {
        return published.format("%b %-d, %Y").to_string();
    };

    if future { format!("In {span}") } else { format!("{span} ago") }
}

/// Relative label for a headline, falling back to the raw timestamp.
pub fn display_date(item: &NewsItem, now: DateTime<Utc>) -> String {
    match parse_publication_date(item.published_date()) {
        Some(published) => relative_time(published, now),
        None => {
            warn!(date = item.published_date(), "Unparsable publication date");
            item.published_date().to_string()
        }
    }
}

/// `"<author>  @  <CATEGORY>"`, or just the category without an author.
pub fn info_line(item: &NewsItem) -> String {
    let category = item.category().to_uppercase();
    match item.author() {
        Some(author) if !author.is_empty() => format!("{author}  @  {category}"),
        _ => category,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2020, 1, 10, 12, 0, 0).unwrap()
    }

    fn item(date: &str, author: Option<&str>) -> NewsItem {
        NewsItem::new(
            "Title".to_string(),
            "Science".to_string(),
            date.to_string(),
            "example.com".to_string(),
            author.map(str::to_string),
        )
    }

    #[test]
    fn test_truncate_for_log_short_string() {
        assert_eq!(truncate_for_log("Hello, world!", 100), "Hello, world!");
    }

    #[test]
    fn test_truncate_for_log_long_string() {
        let s = "a".repeat(500);
        let result = truncate_for_log(&s, 100);
        assert!(result.starts_with(&"a".repeat(100)));
        assert!(result.contains("…(+400 bytes)"));
    }

    #[test]
    fn test_truncate_for_log_respects_char_boundaries() {
        let result = truncate_for_log("héllo", 2);
        assert_eq!(result, "h…(+5 bytes)");
    }

    #[test]
    fn test_parse_publication_date() {
        let parsed = parse_publication_date("2020-01-01T00:00:00Z").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap());
        assert!(parse_publication_date("yesterday").is_none());
        assert!(parse_publication_date("2020-01-01").is_none());
    }

    #[test]
    fn test_relative_time_past() {
        assert_eq!(relative_time(now(), now()), "0 minutes ago");
        assert_eq!(relative_time(now() - Duration::minutes(1), now()), "1 minute ago");
        assert_eq!(relative_time(now() - Duration::minutes(59), now()), "59 minutes ago");
        assert_eq!(relative_time(now() - Duration::hours(3), now()), "3 hours ago");
        assert_eq!(relative_time(now() - Duration::hours(30), now()), "Yesterday");
        assert_eq!(relative_time(now() - Duration::days(4), now()), "4 days ago");
        assert_eq!(relative_time(now() - Duration::days(9), now()), "Jan 1, 2020");
    }

    #[test]
    fn test_relative_time_future() {
        assert_eq!(relative_time(now() + Duration::minutes(5), now()), "In 5 minutes");
        assert_eq!(relative_time(now() + Duration::hours(2), now()), "In 2 hours");
    }

    #[test]
    fn test_display_date_falls_back_to_raw() {
        assert_eq!(display_date(&item("2020-01-10T09:00:00Z", None), now()), "3 hours ago");
        assert_eq!(display_date(&item("soon", None), now()), "soon");
    }

    #[test]
    fn test_info_line() {
        assert_eq!(info_line(&item("", None)), "SCIENCE");
        assert_eq!(info_line(&item("", Some("Alice, Bob"))), "Alice, Bob  @  SCIENCE");
    }
}
