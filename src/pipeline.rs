//! Per-category headline pipeline: probe, build, fetch, parse.
//!
//! [`CategoryPipeline::fetch`] is the entry point the shell calls once per
//! tab. Every failure is recovered here and reported as a [`FetchError`];
//! nothing below this boundary panics or aborts the process.
//!
//! Pipelines hold no mutable state, so runs for different categories can be
//! driven concurrently through a shared reference.

use crate::fetcher::FetchText;
use crate::models::{CategorySelector, NewsItem, Query};
use crate::parser::{ParseError, parse_headlines};
use crate::request::{RequestBuilder, redact_api_key};
use futures::stream::{self, StreamExt};
use std::time::Duration;
use thiserror::Error;
use tokio::net::lookup_host;
use tokio::time::timeout;
use tracing::{debug, info, instrument, warn};
use url::{Host, Url};

/// Why a category produced no list.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The connectivity probe failed; no request was attempted.
    #[error("no network connection")]
    NoNetwork,

    /// Malformed URL, non-200 status or transport failure.
    #[error("request returned no data")]
    RequestFailed,

    #[error("could not parse response: {0}")]
    ParseFailed(#[from] ParseError),
}

/// Trait for checking that the network is reachable before fetching.
#[allow(async_fn_in_trait)]
pub trait Connectivity {
    async fn is_connected(&self) -> bool;
}

/// Connectivity check that resolves the API host.
#[derive(Debug, Clone)]
pub struct HostProbe {
    host: String,
    port: u16,
    timeout: Duration,
}

impl HostProbe {
    pub fn new(host: String, port: u16, timeout: Duration) -> Self {
        Self { host, port, timeout }
    }

    /// Probe the host and port of `url`.
    ///
    /// IPv6 hosts are passed without the brackets `host_str` keeps.
    pub fn for_url(url: &Url, timeout: Duration) -> Self {
        let host = match url.host() {
            Some(Host::Domain(domain)) => domain.to_string(),
            Some(Host::Ipv4(addr)) => addr.to_string(),
            Some(Host::Ipv6(addr)) => addr.to_string(),
            None => String::new(),
        };
        Self::new(host, url.port_or_known_default().unwrap_or(443), timeout)
    }
}

impl Connectivity for HostProbe {
    #[instrument(level = "debug", skip_all, fields(host = %self.host, port = self.port))]
    async fn is_connected(&self) -> bool {
        if self.host.is_empty() {
            return false;
        }
        match timeout(self.timeout, lookup_host((self.host.as_str(), self.port))).await {
            Ok(Ok(mut addrs)) => addrs.next().is_some(),
            Ok(Err(e)) => {
                debug!(error = %e, "Host lookup failed");
                false
            }
            Err(_) => {
                debug!(timeout = ?self.timeout, "Host lookup timed out");
                false
            }
        }
    }
}

/// Fetches and parses the headlines for one category at a time.
#[derive(Debug)]
pub struct CategoryPipeline<F, C> {
    requests: RequestBuilder,
    fetcher: F,
    probe: C,
}

impl<F, C> CategoryPipeline<F, C>
where
    F: FetchText,
    C: Connectivity,
{
    pub fn new(requests: RequestBuilder, fetcher: F, probe: C) -> Self {
        Self {
            requests,
            fetcher,
            probe,
        }
    }

    /// Headlines for one tab, newest first as ordered by the API.
    ///
    /// An empty vector means the request worked but found nothing.
    #[instrument(level = "info", skip(self))]
    pub async fn fetch(&self, selector: CategorySelector) -> Result<Vec<NewsItem>, FetchError> {
        let url = self.requests.for_category(selector);
        self.run(&url).await
    }

    /// Headlines for an arbitrary section or tag pair.
    #[instrument(level = "info", skip(self))]
    pub async fn fetch_query(&self, query: &Query) -> Result<Vec<NewsItem>, FetchError> {
        let url = self.requests.build(query);
        self.run(&url).await
    }

    async fn run(&self, url: &str) -> Result<Vec<NewsItem>, FetchError> {
        if !self.probe.is_connected().await {
            warn!("Network unavailable; skipping request");
            return Err(FetchError::NoNetwork);
        }

        let Some(body) = self.fetcher.fetch(url).await else {
            warn!(url = %redact_api_key(url), "Request returned no data");
            return Err(FetchError::RequestFailed);
        };

        match parse_headlines(&body) {
            Ok(items) => {
                info!(count = items.len(), "Parsed headlines");
                Ok(items)
            }
            Err(e) => {
                warn!(error = %e, "Failed to parse headlines");
                Err(e.into())
            }
        }
    }
}

/// What a tab shows for a finished pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TabOutcome {
    Headlines(Vec<NewsItem>),
    NoNews,
    NoInternet,
    Error,
}

impl TabOutcome {
    /// Text shown in place of the list, if there is no list.
    pub fn message(&self) -> Option<&'static str> {
        match self {
            TabOutcome::Headlines(_) => None,
            TabOutcome::NoNews => Some("No news found."),
            TabOutcome::NoInternet => Some("No Internet connection."),
            TabOutcome::Error => Some("Problem loading news."),
        }
    }
}

impl From<Result<Vec<NewsItem>, FetchError>> for TabOutcome {
    fn from(result: Result<Vec<NewsItem>, FetchError>) -> Self {
        match result {
            Ok(items) if items.is_empty() => TabOutcome::NoNews,
            Ok(items) => TabOutcome::Headlines(items),
            Err(FetchError::NoNetwork) => TabOutcome::NoInternet,
            Err(FetchError::RequestFailed | FetchError::ParseFailed(_)) => TabOutcome::Error,
        }
    }
}

/// The finished state of one tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabReport {
    pub category: CategorySelector,
    pub title: &'static str,
    pub outcome: TabOutcome,
}

impl TabReport {
    pub fn new(category: CategorySelector, outcome: TabOutcome) -> Self {
        Self {
            category,
            title: category.title(),
            outcome,
        }
    }
}

/// Run every selected tab's pipeline concurrently and return the reports in
/// tab order.
///
/// Runs complete in any order; a failing tab never affects the others.
#[instrument(level = "info", skip_all, fields(tabs = selectors.len()))]
pub async fn load_tabs<F, C>(
    pipeline: &CategoryPipeline<F, C>,
    selectors: &[CategorySelector],
) -> Vec<TabReport>
where
    F: FetchText,
    C: Connectivity,
{
    let mut reports: Vec<TabReport> = stream::iter(selectors.iter().copied())
        .map(|selector| async move {
            let outcome = TabOutcome::from(pipeline.fetch(selector).await);
            debug!(?selector, status = ?outcome.message(), "Tab finished");
            TabReport::new(selector, outcome)
        })
        .buffer_unordered(selectors.len().max(1))
        .collect()
        .await;

    reports.sort_by_key(|report| report.category.position());
    reports
}
