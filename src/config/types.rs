use serde::Deserialize;

/// Main configuration structure for Catalog-Harvest
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub catalog: CatalogConfig,
    #[serde(rename = "detail-api")]
    pub detail_api: DetailApiConfig,
    #[serde(default)]
    pub http: HttpConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Paginated catalog listing configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct CatalogConfig {
    /// Listing URL; the page parameter is appended to it
    pub base_url: String,

    /// Attribute that marks product offer elements in the listing markup
    #[serde(default = "default_offer_attribute")]
    pub offer_attribute: String,

    /// Name of the page query parameter
    #[serde(default = "default_page_param")]
    pub page_param: String,

    /// Consecutive pages without new identifiers before the crawl stops
    #[serde(default = "default_confirm_empty_pages")]
    pub confirm_empty_pages: u32,

    /// Hard cap on the number of pages examined
    #[serde(default)]
    pub max_pages: Option<u32>,
}

/// Partner detail API configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct DetailApiConfig {
    /// Bulk items endpoint
    pub endpoint: String,

    /// Only return items that are in stock
    #[serde(default = "default_stock_only")]
    pub stock_only: bool,

    /// Response format requested from the API
    #[serde(default = "default_format")]
    pub format: String,
}

/// HTTP client configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct HttpConfig {
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Whole-request timeout (seconds)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Connection establishment timeout (seconds)
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct OutputConfig {
    /// Identifier list written by discovery and read by the details job
    #[serde(default = "default_identifiers_path")]
    pub identifiers_path: String,

    /// CSV table written by the details job
    #[serde(default = "default_details_path")]
    pub details_path: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
            timeout_secs: default_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            identifiers_path: default_identifiers_path(),
            details_path: default_details_path(),
        }
    }
}

fn default_offer_attribute() -> String {
    "data-offerid".to_string()
}

fn default_page_param() -> String {
    "page".to_string()
}

fn default_confirm_empty_pages() -> u32 {
    1
}

fn default_stock_only() -> bool {
    true
}

fn default_format() -> String {
    "json".to_string()
}

fn default_user_agent() -> String {
    format!("catalog-harvest/{}", env!("CARGO_PKG_VERSION"))
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_connect_timeout_secs() -> u64 {
    10
}

fn default_identifiers_path() -> String {
    "out/item_ids.txt".to_string()
}

fn default_details_path() -> String {
    "out/items.csv".to_string()
}
