//! Plain text output for the terminal.
//!
//! ```text
//! == Science ==
//! 1. Scientists find water on the moon
//!    Jane Doe  @  SCIENCE
//!    3 hours ago
//!    https://www.theguardian.com/science/...
//! ```

use super::TabReport;
use crate::pipeline::TabOutcome;
use crate::utils::{display_date, info_line};
use chrono::{DateTime, Utc};
use std::fmt::Write;

pub fn render(reports: &[TabReport], now: DateTime<Utc>) -> String {
    let mut out = String::new();
    for (i, report) in reports.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let _ = writeln!(out, "== {} ==", report.title);
        match &report.outcome {
            TabOutcome::Headlines(items) => {
                for (n, item) in items.iter().enumerate() {
                    let _ = writeln!(out, "{}. {}", n + 1, item.title());
                    let _ = writeln!(out, "   {}", info_line(item));
                    let _ = writeln!(out, "   {}", display_date(item, now));
                    let _ = writeln!(out, "   {}", item.browser_url());
                }
            }
            other => {
                let _ = writeln!(out, "{}", other.message().unwrap_or_default());
            }
        }
    }
    out
}
