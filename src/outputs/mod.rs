//! Renderers for finished tabs.
//!
//! Each submodule turns a list of [`TabReport`]s into one output format:
//!
//! # Submodules
//!
//! - [`text`]: Plain terminal listing, one block per headline
//! - [`markdown`]: One `##` section per tab with linked headlines
//! - [`json`]: Machine-readable array of tab reports
//!
//! Renderers only read the reports; tabs arrive already in display order.

use chrono::{DateTime, Utc};
use clap::ValueEnum;

pub use crate::pipeline::TabReport;

pub mod json;
pub mod markdown;
pub mod text;

/// Output format selected on the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Markdown,
    Json,
}

/// Render `reports` in the requested format.
///
/// # Errors
///
/// Only the JSON renderer can fail, if serialization fails.
pub fn render(
    format: OutputFormat,
    reports: &[TabReport],
    now: DateTime<Utc>,
) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Text => Ok(text::render(reports, now)),
        OutputFormat::Markdown => Ok(markdown::render(reports, now)),
        OutputFormat::Json => json::render(reports),
    }
}
