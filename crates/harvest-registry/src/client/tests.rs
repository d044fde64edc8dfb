//! Unit tests for the browse client

use super::*;

use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_fetch_depended_page_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/browse/depended"))
        .and(query_param("offset", "0"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("<a class=\"name\" href=\"/package/lodash\">lodash</a>"),
        )
        .mount(&mock_server)
        .await;

    let client = BrowseClient::new(mock_server.uri()).unwrap();
    let html = client.fetch_depended_page(0).await.unwrap();
    assert!(html.contains("lodash"));
}

#[tokio::test]
async fn test_fetch_depended_page_passes_offset() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/browse/depended"))
        .and(query_param("offset", "36"))
        .respond_with(ResponseTemplate::new(200).set_body_string("page two"))
        .mount(&mock_server)
        .await;

    let client = BrowseClient::new(mock_server.uri()).unwrap();
    let html = client.fetch_depended_page(36).await.unwrap();
    assert_eq!(html, "page two");
}

#[tokio::test]
async fn test_server_error_is_a_registry_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/browse/depended"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let client = BrowseClient::new(mock_server.uri()).unwrap();
    let result = client.fetch_depended_page(0).await;

    match result {
        Err(HarvestError::Registry { message, .. }) => {
            assert!(message.contains("offset 0"));
            assert!(message.contains("500"));
        },
        other => panic!("expected Registry error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_unreachable_server_is_a_registry_error() {
    // Nothing listens on this port
    let client = BrowseClient::new("http://127.0.0.1:1").unwrap();
    let result = client.fetch_depended_page(0).await;
    assert!(matches!(result, Err(HarvestError::Registry { .. })));
}
