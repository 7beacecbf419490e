//! Command-line entry point: load the selected tabs and print them.
//!
//! ```sh
//! guardian_headlines -c science --format markdown
//! ```

use chrono::Utc;
use clap::Parser;
use guardian_headlines::cli::Cli;
use guardian_headlines::outputs::render;
use guardian_headlines::{CategoryPipeline, Config, HostProbe, HttpFetcher, RequestBuilder, TabOutcome, load_tabs};
use std::error::Error;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();

    let args = Cli::parse();
    debug!(?args.categories, ?args.format, "Parsed CLI arguments");

    // ---- Config: defaults <- file <- flags ----
    let config = args.apply_overrides(Config::load(args.config.as_deref()).await?);
    config.validate()?;
    let base_url = config.parsed_base_url()?;
    info!(
        base_url = %base_url,
        query_mode = ?config.query_mode,
        page_size = config.page_size,
        "Configuration ready"
    );

    let requests = RequestBuilder::new(
        base_url.clone(),
        config.api_key.clone(),
        config.page_size,
        config.order_by.clone(),
        config.query_mode,
    );
    let fetcher = HttpFetcher::new(config.connect_timeout(), config.read_timeout())?;
    let probe = HostProbe::for_url(&base_url, config.probe_timeout());
    let pipeline = CategoryPipeline::new(requests, fetcher, probe);

    // ---- Load tabs concurrently ----
    let selectors = args.selected_categories();
    let reports = load_tabs(&pipeline, &selectors).await;

    let loaded = reports
        .iter()
        .filter(|r| matches!(r.outcome, TabOutcome::Headlines(_)))
        .count();
    info!(tabs = reports.len(), loaded, "All tabs finished");

    let output = render(args.format, &reports, Utc::now())?;
    print!("{output}");

    let elapsed = start_time.elapsed();
    info!(?elapsed, "Execution complete");
    Ok(())
}
