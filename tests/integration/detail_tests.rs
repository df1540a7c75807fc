use catalog_harvest::config::{DetailApiConfig, HttpConfig};
use catalog_harvest::crawler::build_http_client;
use catalog_harvest::{DetailResolver, HarvestError};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ITEMS_PATH: &str = "/api/1.0/partner/test/items/";

fn resolver(server_uri: &str) -> DetailResolver {
    let config = DetailApiConfig {
        endpoint: format!("{}{}", server_uri, ITEMS_PATH),
        stock_only: true,
        format: "json".to_string(),
    };
    let client = build_http_client(&HttpConfig::default()).expect("client");
    DetailResolver::new(client, &config)
}

fn ids(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

#[tokio::test]
async fn test_resolve_single_bulk_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(ITEMS_PATH))
        .and(query_param("itemsIds", "123,456"))
        .and(query_param("stock", "True"))
        .and(query_param("format", "json"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"[
                {"ItemId": 123, "Name": "Widget", "Url": "/w/123", "Price": 100, "OldPrice": 0, "Vendor": "Acme"},
                {"ItemId": 456, "Name": "Gadget", "Url": "/g/456", "Price": 80, "OldPrice": 120, "Vendor": "Zeta"}
            ]"#,
        ))
        .expect(1)
        .mount(&mock_server)
        .await;

    let records = resolver(&mock_server.uri())
        .resolve(&ids(&["123", "456"]))
        .await
        .expect("resolve succeeds");

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].identifier, "123");
    assert_eq!(records[0].price.to_string(), "100");
    assert_eq!(records[0].promo_price.to_string(), "-1");
    assert_eq!(records[0].brand, "Acme");
    assert_eq!(records[1].identifier, "456");
    assert_eq!(records[1].price.to_string(), "120");
    assert_eq!(records[1].promo_price.to_string(), "80");
}

#[tokio::test]
async fn test_resolve_http_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(ITEMS_PATH))
        .respond_with(ResponseTemplate::new(401))
        .mount(&mock_server)
        .await;

    let result = resolver(&mock_server.uri()).resolve(&ids(&["1"])).await;

    assert!(matches!(result, Err(HarvestError::Network { .. })));
}

#[tokio::test]
async fn test_resolve_missing_field_is_schema_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(ITEMS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"[{"ItemId": "1", "Name": "Widget", "Url": "/w/1", "Price": 10, "Vendor": "Acme"}]"#,
        ))
        .mount(&mock_server)
        .await;

    let result = resolver(&mock_server.uri()).resolve(&ids(&["1"])).await;

    assert!(matches!(result, Err(HarvestError::Schema(_))));
}
