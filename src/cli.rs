//! Command-line interface definitions for Guardian Headlines.
//!
//! This module defines the CLI arguments and options using the `clap` crate.
//! Flags override values from the optional config file.

use crate::config::Config;
use crate::models::{CategorySelector, QueryMode};
use crate::outputs::OutputFormat;
use clap::Parser;

/// Command-line arguments for the Guardian Headlines application.
///
/// # Examples
///
/// ```sh
/// # All four tabs with the shared developer key
/// guardian_headlines
///
/// # Only science and world, using the section filter
/// guardian_headlines -c science -c world --query-mode section
///
/// # JSON output with your own key
/// GUARDIAN_API_KEY=... guardian_headlines --format json
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Categories to load (default: all four tabs)
    #[arg(short = 'c', long = "category", value_enum)]
    pub categories: Vec<CategorySelector>,

    /// Optional path to config.yaml file
    #[arg(long)]
    pub config: Option<String>,

    /// Guardian content API key
    #[arg(long, env = "GUARDIAN_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Filter categories by tag pair or by section
    #[arg(long, value_enum)]
    pub query_mode: Option<QueryMode>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

impl Cli {
    /// Tabs to load, in display order and without duplicates.
    pub fn selected_categories(&self) -> Vec<CategorySelector> {
        if self.categories.is_empty() {
            return CategorySelector::ALL.to_vec();
        }
        let mut selected = self.categories.clone();
        selected.sort();
        selected.dedup();
        selected
    }

    /// Apply command-line overrides on top of `config`.
    pub fn apply_overrides(&self, mut config: Config) -> Config {
        if let Some(api_key) = &self.api_key {
            config.api_key = api_key.clone();
        }
        if let Some(mode) = self.query_mode {
            config.query_mode = mode;
        }
        config
    }
}
