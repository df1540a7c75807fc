//! Catalog-Harvest: a two-stage product catalog harvester
//!
//! This crate walks a paginated catalog listing to discover product offer
//! identifiers, then resolves those identifiers to product details through a
//! partner API and persists them as CSV.

pub mod config;
pub mod crawler;
pub mod detail;
pub mod output;

use thiserror::Error;

/// Main error type for Catalog-Harvest operations
#[derive(Debug, Error)]
pub enum HarvestError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Network error for {url}: {message}")]
    Network { url: String, message: String },

    #[error("Markup parse error: {0}")]
    Parse(String),

    #[error("Schema error: {0}")]
    Schema(String),

    #[error("No records to write")]
    EmptyInput,

    #[error("URL parse error: {0}")]
    UrlParse(#[from] ::url::ParseError),

    /// The HTTP client could not be built; no request was sent
    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Result type alias for Catalog-Harvest operations
pub type Result<T> = std::result::Result<T, HarvestError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use crawler::{crawl_catalog, run_discovery, CrawlOutcome, IdentifierSet, PageSource};
pub use detail::{run_details, DetailRecord, DetailResolver};
pub use output::{load_identifiers, save_identifiers, write_table};
