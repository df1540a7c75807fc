use crate::{create_test_config, listing_page};
use catalog_harvest::crawler::{
    build_http_client, crawl_catalog, CrawlOptions, HttpPageSource, StopReason,
};
use catalog_harvest::HarvestError;
use tempfile::TempDir;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount_page(server: &MockServer, page: u32, ids: &[&str]) {
    Mock::given(method("GET"))
        .and(path("/catalog/dogs/"))
        .and(query_param("section_id", "166"))
        .and(query_param("page", page.to_string().as_str()))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(listing_page(ids))
                .insert_header("content-type", "text/html"),
        )
        .expect(1)
        .mount(server)
        .await;
}

fn source(config: &catalog_harvest::Config) -> HttpPageSource {
    HttpPageSource::new(build_http_client(&config.http).expect("client"))
}

#[tokio::test]
async fn test_crawl_until_no_new_ids() {
    let mock_server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    let config = create_test_config(&mock_server.uri(), dir.path());

    mount_page(&mock_server, 1, &["101", "102", "103"]).await;
    mount_page(&mock_server, 2, &["104", "105"]).await;
    // Catalogs often serve their last page again for out-of-range ordinals
    mount_page(&mock_server, 3, &["104", "105"]).await;

    let outcome = crawl_catalog(
        &source(&config),
        &config.catalog.base_url,
        &CrawlOptions::from(&config.catalog),
    )
    .await
    .expect("crawl succeeds");

    let ids: Vec<&str> = outcome.identifiers.iter().map(String::as_str).collect();
    assert_eq!(ids, vec!["101", "102", "103", "104", "105"]);
    assert_eq!(outcome.pages_examined, 3);
    assert_eq!(outcome.stop_reason, StopReason::Exhausted);
}

#[tokio::test]
async fn test_crawl_empty_catalog() {
    let mock_server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    let config = create_test_config(&mock_server.uri(), dir.path());

    mount_page(&mock_server, 1, &[]).await;

    let outcome = crawl_catalog(
        &source(&config),
        &config.catalog.base_url,
        &CrawlOptions::from(&config.catalog),
    )
    .await
    .expect("crawl succeeds");

    assert!(outcome.identifiers.is_empty());
    assert_eq!(outcome.pages_examined, 1);
}

#[tokio::test]
async fn test_crawl_aborts_on_server_error() {
    let mock_server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    let config = create_test_config(&mock_server.uri(), dir.path());

    mount_page(&mock_server, 1, &["1", "2"]).await;
    Mock::given(method("GET"))
        .and(path("/catalog/dogs/"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&mock_server)
        .await;

    let result = crawl_catalog(
        &source(&config),
        &config.catalog.base_url,
        &CrawlOptions::from(&config.catalog),
    )
    .await;

    match result {
        Err(HarvestError::Network { url, message }) => {
            assert!(url.ends_with("page=2"), "{}", url);
            assert_eq!(message, "HTTP 503");
        }
        other => panic!("expected network error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_crawl_confirm_window_rides_over_empty_page() {
    let mock_server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    let mut config = create_test_config(&mock_server.uri(), dir.path());
    config.catalog.confirm_empty_pages = 2;

    mount_page(&mock_server, 1, &["1"]).await;
    mount_page(&mock_server, 2, &[]).await;
    mount_page(&mock_server, 3, &["2"]).await;
    mount_page(&mock_server, 4, &["2"]).await;
    mount_page(&mock_server, 5, &[]).await;

    let outcome = crawl_catalog(
        &source(&config),
        &config.catalog.base_url,
        &CrawlOptions::from(&config.catalog),
    )
    .await
    .expect("crawl succeeds");

    assert_eq!(outcome.identifiers.len(), 2);
    assert_eq!(outcome.pages_examined, 5);
}
