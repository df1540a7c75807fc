//! Crawler module for catalog discovery
//!
//! This module contains the discovery stage of the pipeline:
//! - HTTP fetching without retries
//! - Attribute extraction from listing markup
//! - The page-by-page accumulation loop

mod accumulator;
mod fetcher;
mod parser;

pub use accumulator::{
    crawl_catalog, page_url, CrawlOptions, CrawlOutcome, IdentifierSet, StopReason,
};
pub use fetcher::{build_http_client, fetch_text, HttpPageSource, PageSource};
pub use parser::extract_attribute_values;

use crate::config::Config;
use crate::output::{ensure_parent_dir, save_identifiers};
use crate::Result;
use std::path::Path;

/// Runs the discovery batch job
///
/// This will:
/// 1. Build the HTTP client
/// 2. Crawl the configured listing until it is exhausted
/// 3. Write the identifiers, one per line, to the configured path,
///    creating its directory if needed
///
/// Nothing is written if the crawl fails.
///
/// # Returns
///
/// * `Ok(usize)` - Number of identifiers written
/// * `Err(HarvestError)` - Crawl or write failed
pub async fn run_discovery(config: &Config) -> Result<usize> {
    let client = build_http_client(&config.http)?;
    let source = HttpPageSource::new(client);
    let options = CrawlOptions::from(&config.catalog);

    tracing::info!("Crawling catalog listing: {}", config.catalog.base_url);
    let outcome = crawl_catalog(&source, &config.catalog.base_url, &options).await?;
    tracing::info!(
        "Crawl finished ({:?}) after {} pages with {} identifiers",
        outcome.stop_reason,
        outcome.pages_examined,
        outcome.identifiers.len()
    );

    let path = Path::new(&config.output.identifiers_path);
    ensure_parent_dir(path)?;
    save_identifiers(&outcome.identifiers, path)?;

    Ok(outcome.identifiers.len())
}
