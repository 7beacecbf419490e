//! Markdown output, one section per tab.
//!
//! ```text
//! ## Technology
//!
//! - [Headline](http://example.com/a)
//!   *Jane Doe  @  TECHNOLOGY* · 5 minutes ago
//! ```

use super::TabReport;
use crate::pipeline::TabOutcome;
use crate::utils::{display_date, info_line};
use chrono::{DateTime, Utc};
use std::fmt::Write;

/// Escape characters that would break a link label.
fn escape_label(title: &str) -> String {
    title.replace('[', "\\[").replace(']', "\\]")
}

pub fn render(reports: &[TabReport], now: DateTime<Utc>) -> String {
    let mut md = String::new();
    for report in reports {
        let _ = writeln!(md, "## {}\n", report.title);
        match &report.outcome {
            TabOutcome::Headlines(items) => {
                for item in items {
                    let _ = writeln!(md, "- [{}]({})", escape_label(item.title()), item.browser_url());
                    let _ = writeln!(md, "  *{}* · {}", info_line(item), display_date(item, now));
                }
            }
            other => {
                let _ = writeln!(md, "_{}_", other.message().unwrap_or_default());
            }
        }
        md.push('\n');
    }
    md
}
