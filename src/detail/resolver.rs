//! Bulk detail lookup against the partner items API

use crate::config::DetailApiConfig;
use crate::crawler::fetch_text;
use crate::detail::types::{DetailRecord, RawItem};
use crate::{HarvestError, Result};
use reqwest::Client;
use url::Url;

/// Resolves identifiers to product details with one request per batch
#[derive(Debug, Clone)]
pub struct DetailResolver {
    client: Client,
    endpoint: String,
    stock_only: bool,
    format: String,
}

impl DetailResolver {
    pub fn new(client: Client, config: &DetailApiConfig) -> Self {
        Self {
            client,
            endpoint: config.endpoint.clone(),
            stock_only: config.stock_only,
            format: config.format.clone(),
        }
    }

    /// Builds the lookup URL for `identifiers`
    ///
    /// All identifiers go into a single comma-joined `itemsIds` parameter.
    /// Very long lists can exceed server URL limits; nothing here splits them.
    pub fn request_url(&self, identifiers: &[String]) -> Result<Url> {
        let mut url = Url::parse(&self.endpoint)?;
        url.query_pairs_mut()
            .append_pair("itemsIds", &identifiers.join(","))
            .append_pair("stock", if self.stock_only { "True" } else { "False" })
            .append_pair("format", &self.format);
        Ok(url)
    }

    /// Looks up `identifiers` and maps each returned item to a `DetailRecord`
    ///
    /// Records come back in the order the API returns them. An empty input
    /// returns an empty list without touching the network.
    pub async fn resolve(&self, identifiers: &[String]) -> Result<Vec<DetailRecord>> {
        if identifiers.is_empty() {
            tracing::warn!("No identifiers to resolve, skipping detail request");
            return Ok(Vec::new());
        }

        let url = self.request_url(identifiers)?;
        tracing::info!("Requesting details for {} identifiers", identifiers.len());
        tracing::debug!("Detail request URL: {}", url);

        let body = fetch_text(&self.client, url.as_str()).await?;
        let records = decode_items(&body)?;

        let promoted = records.iter().filter(|r| r.has_promotion()).count();
        tracing::info!(
            "Mapped {} detail records ({} on promotion)",
            records.len(),
            promoted
        );
        Ok(records)
    }
}

/// Decodes an API response body into normalized records
///
/// # Errors
///
/// Returns `HarvestError::Schema` if the body is not a JSON array of items
/// carrying every required field.
pub fn decode_items(body: &str) -> Result<Vec<DetailRecord>> {
    let items: Vec<RawItem> = serde_json::from_str(body)
        .map_err(|e| HarvestError::Schema(format!("unexpected detail response: {}", e)))?;

    Ok(items.into_iter().map(DetailRecord::from).collect())
}
