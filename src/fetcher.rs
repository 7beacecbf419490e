//! HTTP retrieval of search responses.
//!
//! The fetcher "fails soft": malformed URLs, non-200 statuses and transport
//! errors are logged and reported as `None`, never as an error the caller has
//! to propagate. A server that answers 200 with an empty body yields
//! `Some("")`, which stays distinguishable from a failed fetch.
//!
//! # Architecture
//!
//! - [`FetchText`]: Trait the pipeline fetches through
//! - [`HttpFetcher`]: `reqwest` implementation with connect and read timeouts

use crate::request::redact_api_key;
use crate::utils::truncate_for_log;
use reqwest::{Client, StatusCode};
use std::time::{Duration, Instant};
use tracing::{debug, instrument, warn};
use url::Url;

/// Trait for retrieving a response body as text.
///
/// Implementors return `None` when no payload could be obtained.
#[allow(async_fn_in_trait)]
pub trait FetchText {
    async fn fetch(&self, url: &str) -> Option<String>;
}

/// Fetches over HTTP with a shared `reqwest` client.
///
/// Cloning is cheap: the underlying connection pool is reference counted.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Build a fetcher with the given connect and read timeouts.
    ///
    /// # Errors
    ///
    /// Returns an error if the TLS backend cannot be initialized.
    pub fn new(connect_timeout: Duration, read_timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .connect_timeout(connect_timeout)
            .read_timeout(read_timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }
}

impl FetchText for HttpFetcher {
    /// GET `url` and return the body on HTTP 200.
    ///
    /// The body is decoded as UTF-8 whatever charset the `Content-Type`
    /// header names; invalid sequences become U+FFFD. The response and its
    /// connection are owned by this call and released on every return path.
    #[instrument(level = "info", skip_all, fields(url = %redact_api_key(url)))]
    async fn fetch(&self, url: &str) -> Option<String> {
        let t0 = Instant::now();

        let parsed = match Url::parse(url) {
            Ok(parsed) => parsed,
            Err(e) => {
                warn!(error = %e, "Malformed request URL");
                return None;
            }
        };

        let response = match self.client.get(parsed).send().await {
            Ok(response) => response,
            Err(e) => {
                warn!(elapsed_ms = t0.elapsed().as_millis(), error = %e, "Request failed");
                return None;
            }
        };

        let status = response.status();
        if status != StatusCode::OK {
            warn!(status = status.as_u16(), "Unexpected response status");
            return None;
        }

        match response.bytes().await {
            Ok(bytes) => {
                let body = String::from_utf8_lossy(&bytes).into_owned();
                debug!(
                    bytes = body.len(),
                    elapsed_ms = t0.elapsed().as_millis(),
                    preview = %truncate_for_log(&body, 200),
                    "Fetched response body"
                );
                Some(body)
            }
            Err(e) => {
                warn!(error = %e, "Failed reading response body");
                None
            }
        }
    }
}
