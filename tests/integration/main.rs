//! Integration tests for the harvester
//!
//! These tests use wiremock to stand in for the catalog listing and the
//! partner detail API and run each stage end-to-end.

mod crawl_tests;
mod detail_tests;

use catalog_harvest::config::{CatalogConfig, Config, DetailApiConfig, HttpConfig, OutputConfig};
use std::path::Path;

/// Creates a test configuration pointing both stages at `server_uri`
pub fn create_test_config(server_uri: &str, out_dir: &Path) -> Config {
    Config {
        catalog: CatalogConfig {
            base_url: format!("{}/catalog/dogs/?section_id=166", server_uri),
            offer_attribute: "data-offerid".to_string(),
            page_param: "page".to_string(),
            confirm_empty_pages: 1,
            max_pages: None,
        },
        detail_api: DetailApiConfig {
            endpoint: format!("{}/api/1.0/partner/test/items/", server_uri),
            stock_only: true,
            format: "json".to_string(),
        },
        http: HttpConfig {
            user_agent: "TestHarvester/1.0".to_string(),
            timeout_secs: 5,
            connect_timeout_secs: 2,
        },
        output: OutputConfig {
            identifiers_path: out_dir
                .join("out")
                .join("item_ids.txt")
                .to_string_lossy()
                .into_owned(),
            details_path: out_dir
                .join("out")
                .join("items.csv")
                .to_string_lossy()
                .into_owned(),
        },
    }
}

/// Renders a listing page with one product card per identifier
pub fn listing_page(ids: &[&str]) -> String {
    let cards: String = ids
        .iter()
        .map(|id| {
            format!(
                r#"<div class="catalog-card" data-offerid="{id}"><a href="/p/{id}">Product {id}</a></div>"#
            )
        })
        .collect();
    format!(
        r#"<html><head><title>Dry dog food</title></head><body><nav data-page="x"></nav>{}</body></html>"#,
        cards
    )
}
