//! Detail module for resolving identifiers to product records
//!
//! This module contains the second stage of the pipeline:
//! - The partner API payload and the normalized `DetailRecord`
//! - A single bulk lookup for all identifiers
//! - The batch job that ties the identifier file to the CSV table

mod resolver;
mod types;

pub use resolver::{decode_items, DetailResolver};
pub use types::{DetailRecord, RawItem, NO_PROMOTION};

use crate::config::Config;
use crate::crawler::build_http_client;
use crate::output::{ensure_parent_dir, load_identifiers, write_table};
use crate::Result;
use std::path::Path;

/// Runs the details batch job
///
/// This will:
/// 1. Load identifiers from the configured identifier file
/// 2. Resolve them with one detail API request
/// 3. Write the records as CSV to the configured path
///
/// The whole record set is built before the table is written, so a failed
/// lookup leaves any previous table untouched.
///
/// # Returns
///
/// * `Ok(usize)` - Number of records written
/// * `Err(HarvestError)` - Loading, lookup, or writing failed
pub async fn run_details(config: &Config) -> Result<usize> {
    let identifiers = load_identifiers(Path::new(&config.output.identifiers_path))?;
    tracing::info!("{} identifiers loaded", identifiers.len());

    let client = build_http_client(&config.http)?;
    let resolver = DetailResolver::new(client, &config.detail_api);
    let records = resolver.resolve(&identifiers).await?;
    tracing::info!("{} item details fetched", records.len());

    let path = Path::new(&config.output.details_path);
    ensure_parent_dir(path)?;
    write_table(&records, path)?;

    Ok(records.len())
}
