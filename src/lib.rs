//! # Guardian Headlines
//!
//! Fetches categorized headlines from The Guardian's content API, one list
//! per tab (Technology, World, Science, Business).
//!
//! ## Architecture
//!
//! Each tab runs the same pipeline:
//! 1. **Probe**: Check that the API host resolves (no network -> "No Internet connection.")
//! 2. **Request**: Build the search URL for the tab's category ([`request`])
//! 3. **Fetch**: GET the URL; any failure yields no payload ([`fetcher`])
//! 4. **Parse**: Decode the JSON into headlines, all-or-nothing ([`parser`])
//!
//! [`pipeline::load_tabs`] runs the selected tabs concurrently and hands back
//! one [`pipeline::TabReport`] per tab, in tab order, for rendering.

pub mod cli;
pub mod config;
pub mod fetcher;
pub mod models;
pub mod outputs;
pub mod parser;
pub mod pipeline;
pub mod request;
pub mod utils;

#[cfg(test)]
mod test_support;

pub use config::{Config, ConfigError};
pub use fetcher::{FetchText, HttpFetcher};
pub use models::{CategorySelector, NewsItem, Query, QueryMode};
pub use parser::{ParseError, parse_headlines};
pub use pipeline::{CategoryPipeline, Connectivity, FetchError, HostProbe, TabOutcome, TabReport, load_tabs};
pub use request::RequestBuilder;
