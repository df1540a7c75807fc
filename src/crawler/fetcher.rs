//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests made by the harvester:
//! - Building HTTP clients with the configured user agent and timeouts
//! - GET requests returning the response body as text
//! - Error classification into `HarvestError::Network`
//!
//! There is no retry logic here. A failed request fails the whole batch job.

use crate::config::HttpConfig;
use crate::{HarvestError, Result};
use reqwest::Client;
use std::time::Duration;

/// Builds an HTTP client with proper configuration
///
/// # Example
///
/// ```no_run
/// use catalog_harvest::config::HttpConfig;
/// use catalog_harvest::crawler::build_http_client;
///
/// let client = build_http_client(&HttpConfig::default()).unwrap();
/// ```
pub fn build_http_client(config: &HttpConfig) -> std::result::Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.as_str())
        .timeout(Duration::from_secs(config.timeout_secs))
        .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a URL and returns its body as text
///
/// # Error Mapping
///
/// | Condition | Message |
/// |-----------|---------|
/// | Non-2xx status | `HTTP <code>` |
/// | Timeout | `Request timeout` |
/// | Connection failure | `Connection failed: ...` |
/// | Body read failure | reqwest error text |
///
/// All of the above surface as `HarvestError::Network`.
pub async fn fetch_text(client: &Client, url: &str) -> Result<String> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| network_error(url, &e))?;

    let status = response.status();
    if !status.is_success() {
        return Err(HarvestError::Network {
            url: url.to_string(),
            message: format!("HTTP {}", status.as_u16()),
        });
    }

    response.text().await.map_err(|e| network_error(url, &e))
}

/// Classifies a transport failure
fn network_error(url: &str, error: &reqwest::Error) -> HarvestError {
    let message = if error.is_timeout() {
        "Request timeout".to_string()
    } else if error.is_connect() {
        format!("Connection failed: {}", error)
    } else {
        error.to_string()
    };

    HarvestError::Network {
        url: url.to_string(),
        message,
    }
}

/// A source of listing page markup
///
/// The crawl loop only ever talks to this trait, so tests can feed it
/// synthetic pages without a network.
#[allow(async_fn_in_trait)]
pub trait PageSource {
    /// Retrieves the raw content at `url`
    async fn fetch(&self, url: &str) -> Result<String>;
}

/// `PageSource` backed by a live HTTP client
#[derive(Debug, Clone)]
pub struct HttpPageSource {
    client: Client,
}

impl HttpPageSource {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

impl PageSource for HttpPageSource {
    async fn fetch(&self, url: &str) -> Result<String> {
        fetch_text(&self.client, url).await
    }
}
