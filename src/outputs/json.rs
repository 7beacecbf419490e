//! JSON output for scripting.
//!
//! # Output Structure
//!
//! ```text
//! {
//!   "tabs": [
//!     {"category": "technology", "title": "Technology",
//!      "outcome": {"status": "headlines", "items": [{"title": ..., "url": ...}]}},
//!     {"category": "world", "title": "World", "outcome": {"status": "no_internet"}}
//!   ]
//! }
//! ```
//!
//! Each item also carries `browser_url`, the link with its scheme filled in.

use super::TabReport;
use crate::models::{CategorySelector, NewsItem};
use crate::pipeline::TabOutcome;
use serde::Serialize;
use tracing::{info, instrument};

#[derive(Serialize)]
struct JsonItem<'a> {
    #[serde(flatten)]
    item: &'a NewsItem,
    browser_url: String,
}

#[derive(Serialize)]
#[serde(tag = "status", content = "items", rename_all = "snake_case")]
enum JsonOutcome<'a> {
    Headlines(Vec<JsonItem<'a>>),
    NoNews,
    NoInternet,
    Error,
}

#[derive(Serialize)]
struct JsonTab<'a> {
    category: &'a CategorySelector,
    title: &'a str,
    outcome: JsonOutcome<'a>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<&'static str>,
}

#[derive(Serialize)]
struct JsonDocument<'a> {
    tabs: Vec<JsonTab<'a>>,
}

fn outcome(outcome: &TabOutcome) -> JsonOutcome<'_> {
    match outcome {
        TabOutcome::Headlines(items) => JsonOutcome::Headlines(
            items
                .iter()
                .map(|item| JsonItem {
                    item,
                    browser_url: item.browser_url(),
                })
                .collect(),
        ),
        TabOutcome::NoNews => JsonOutcome::NoNews,
        TabOutcome::NoInternet => JsonOutcome::NoInternet,
        TabOutcome::Error => JsonOutcome::Error,
    }
}

/// Serialize the tab reports as pretty-printed JSON.
#[instrument(level = "debug", skip_all, fields(tabs = reports.len()))]
pub fn render(reports: &[TabReport]) -> Result<String, serde_json::Error> {
    let document = JsonDocument {
        tabs: reports
            .iter()
            .map(|report| JsonTab {
                category: &report.category,
                title: report.title,
                outcome: outcome(&report.outcome),
                message: report.outcome.message(),
            })
            .collect(),
    };
    let json = serde_json::to_string_pretty(&document)?;
    info!(bytes = json.len(), "Rendered JSON output");
    Ok(json)
}
