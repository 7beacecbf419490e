//! Data models for headlines and the categories they are grouped into.
//!
//! This module defines the core data structures used throughout the application:
//! - [`NewsItem`]: A single parsed headline, immutable once built
//! - [`CategorySelector`]: One of the four fixed news tabs
//! - [`Query`]: The API filter a tab is fetched with (section or tag pair)

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// A single headline as returned by the content API.
///
/// Built once by the response parser and never mutated afterwards; the
/// fields are private so the only way to obtain one is through
/// [`NewsItem::new`].
///
/// # Fields
///
/// * `title` - The headline text (`webTitle`)
/// * `category` - The section the article belongs to (`sectionName`)
/// * `published_date` - UTC timestamp, `yyyy-MM-ddTHH:mm:ssZ`
/// * `url` - Link to the article; the scheme may be missing
/// * `author` - Contributor names joined with `", "`, if any
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewsItem {
    title: String,
    category: String,
    published_date: String,
    url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    author: Option<String>,
}

impl NewsItem {
    pub fn new(
        title: String,
        category: String,
        published_date: String,
        url: String,
        author: Option<String>,
    ) -> Self {
        Self {
            title,
            category,
            published_date,
            url,
            author,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn published_date(&self) -> &str {
        &self.published_date
    }

    /// The article link exactly as the API returned it.
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn author(&self) -> Option<&str> {
        self.author.as_deref()
    }

    /// The article link, ready to hand to a browser.
    ///
    /// Links without an `http://` or `https://` scheme get `http://` prefixed.
    /// For example: `"example.com/a"` -> `"http://example.com/a"`
    pub fn browser_url(&self) -> String {
        if self.url.starts_with("http://") || self.url.starts_with("https://") {
            self.url.clone()
        } else {
            format!("http://{}", self.url)
        }
    }
}

/// One of the four news tabs.
///
/// Each selector maps to a fixed row of [`CATEGORY_TABLE`]; nothing else in
/// the application branches on tab position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum CategorySelector {
    Technology,
    World,
    Science,
    Business,
}

/// Static description of a tab: its title and the API name it queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryInfo {
    pub selector: CategorySelector,
    /// Title shown on the tab.
    pub title: &'static str,
    /// Name used for both the `section` parameter and each half of the tag pair.
    pub api_name: &'static str,
}

/// Tabs in display order.
pub const CATEGORY_TABLE: [CategoryInfo; 4] = [
    CategoryInfo {
        selector: CategorySelector::Technology,
        title: "Technology",
        api_name: "technology",
    },
    CategoryInfo {
        selector: CategorySelector::World,
        title: "World",
        api_name: "world",
    },
    CategoryInfo {
        selector: CategorySelector::Science,
        title: "Science",
        api_name: "science",
    },
    CategoryInfo {
        selector: CategorySelector::Business,
        title: "Business",
        api_name: "business",
    },
];

impl CategorySelector {
    pub const ALL: [CategorySelector; 4] = [
        CategorySelector::Technology,
        CategorySelector::World,
        CategorySelector::Science,
        CategorySelector::Business,
    ];

    pub fn info(self) -> &'static CategoryInfo {
        &CATEGORY_TABLE[self.position()]
    }

    /// Zero-based tab position.
    pub fn position(self) -> usize {
        self as usize
    }

    pub fn title(self) -> &'static str {
        self.info().title
    }

    pub fn api_name(self) -> &'static str {
        self.info().api_name
    }

    /// The API filter for this tab under the given query mode.
    pub fn query(self, mode: QueryMode) -> Query {
        let name = self.api_name().to_string();
        match mode {
            QueryMode::Section => Query::Section(name),
            QueryMode::Tag => Query::Tag(name.clone(), name),
        }
    }
}

/// How a category is turned into an API filter.
///
/// `tag=technology/technology` returns more results than
/// `section=technology`, so tags are the default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum QueryMode {
    #[default]
    Tag,
    Section,
}

/// A search filter for the content API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    /// `section=<name>`
    Section(String),
    /// `tag=<tag_one>/<tag_two>`
    Tag(String, String),
}
