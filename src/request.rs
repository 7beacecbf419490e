//! Query URL construction for the content API's search endpoint.
//!
//! Every request carries the same fixed parameters and differs only in its
//! filter (`section` or `tag`):
//!
//! ```text
//! https://content.guardianapis.com/search?format=json&tag=science%2Fscience
//!     &show-tags=contributor&page-size=20&order-by=newest&api-key=<key>
//! ```

use crate::models::{CategorySelector, Query, QueryMode};
use tracing::debug;
use url::Url;

/// Builds search URLs from categories or free-form queries.
///
/// The base URL is validated once, by [`crate::config::Config`], so building
/// a URL cannot fail.
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    base_url: Url,
    api_key: String,
    page_size: u32,
    order_by: String,
    mode: QueryMode,
}

impl RequestBuilder {
    pub fn new(base_url: Url, api_key: String, page_size: u32, order_by: String, mode: QueryMode) -> Self {
        Self {
            base_url,
            api_key,
            page_size,
            order_by,
            mode,
        }
    }

    pub fn mode(&self) -> QueryMode {
        self.mode
    }

    /// URL for one of the four tabs, using the configured query mode.
    pub fn for_category(&self, selector: CategorySelector) -> String {
        self.build(&selector.query(self.mode))
    }

    /// URL for an arbitrary section or tag pair.
    pub fn build(&self, query: &Query) -> String {
        let mut url = self.base_url.clone();
        url.set_query(None);
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("format", "json");
            match query {
                Query::Section(section) => {
                    pairs.append_pair("section", section);
                }
                Query::Tag(tag_one, tag_two) => {
                    pairs.append_pair("tag", &format!("{tag_one}/{tag_two}"));
                }
            }
            pairs
                .append_pair("show-tags", "contributor")
                .append_pair("page-size", &self.page_size.to_string())
                .append_pair("order-by", &self.order_by)
                .append_pair("api-key", &self.api_key);
        }

        let url = url.to_string();
        debug!(url = %redact_api_key(&url), "Built request URL");
        url
    }
}

/// Replace the value of `api-key` so URLs can be logged.
pub fn redact_api_key(url: &str) -> String {
    let Ok(mut parsed) = Url::parse(url) else {
        return url.to_string();
    };
    if !parsed.query_pairs().any(|(k, _)| k == "api-key") {
        return url.to_string();
    }
    let pairs: Vec<(String, String)> = parsed
        .query_pairs()
        .map(|(k, v)| {
            let v = if k == "api-key" { "***".to_string() } else { v.into_owned() };
            (k.into_owned(), v)
        })
        .collect();
    parsed.query_pairs_mut().clear().extend_pairs(pairs);
    parsed.to_string()
}
