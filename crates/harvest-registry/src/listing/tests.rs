//! Unit tests for offset computation and the top-N name fetcher

use super::*;

use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[test]
fn test_page_offsets_single_page() {
    assert_eq!(page_offsets(1), vec![0]);
    assert_eq!(page_offsets(10), vec![0]);
    assert_eq!(page_offsets(35), vec![0]);
}

#[test]
fn test_page_offsets_spill_into_second_page() {
    // An exact multiple still requests the next page; the overshoot is
    // truncated after aggregation.
    assert_eq!(page_offsets(36), vec![0, 36]);
    assert_eq!(page_offsets(40), vec![0, 36]);
    assert_eq!(page_offsets(71), vec![0, 36]);
    assert_eq!(page_offsets(72), vec![0, 36, 72]);
}

/// Render a listing page holding `count` names, numbered from `start`
fn listing_page(start: usize, count: usize) -> String {
    (start..start + count)
        .map(|i| format!("<a class=\"name\" href=\"/package/pkg-{i}\">pkg-{i}</a>\n"))
        .collect()
}

async fn mock_page(server: &MockServer, offset: usize, body: String) {
    Mock::given(method("GET"))
        .and(path("/browse/depended"))
        .and(query_param("offset", offset.to_string()))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_fetch_top_names_single_page() {
    let server = MockServer::start().await;
    mock_page(&server, 0, listing_page(0, 36)).await;

    let client = BrowseClient::new(server.uri()).unwrap();
    let names = fetch_top_names(&client, 10).await.unwrap();

    assert_eq!(names.len(), 10);
    assert_eq!(names[0], "pkg-0");
    assert_eq!(names[9], "pkg-9");
}

#[tokio::test]
async fn test_fetch_top_names_across_pages_in_offset_order() {
    let server = MockServer::start().await;
    mock_page(&server, 0, listing_page(0, 36)).await;
    mock_page(&server, 36, listing_page(36, 36)).await;

    let client = BrowseClient::new(server.uri()).unwrap();
    let names = fetch_top_names(&client, 40).await.unwrap();

    assert_eq!(names.len(), 40);
    // Page boundaries stitch together deterministically
    assert_eq!(names[35], "pkg-35");
    assert_eq!(names[36], "pkg-36");
    assert_eq!(names[39], "pkg-39");
}

#[tokio::test]
async fn test_fetch_top_names_zero_count_rejected_before_any_request() {
    // No server at all: a count of zero must fail before any I/O happens
    let client = BrowseClient::new("http://127.0.0.1:1").unwrap();
    let result = fetch_top_names(&client, 0).await;
    assert!(matches!(result, Err(HarvestError::InvalidArgument { .. })));
}

#[tokio::test]
async fn test_fetch_top_names_page_failure_aborts() {
    let server = MockServer::start().await;
    mock_page(&server, 0, listing_page(0, 36)).await;
    Mock::given(method("GET"))
        .and(path("/browse/depended"))
        .and(query_param("offset", "36"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = BrowseClient::new(server.uri()).unwrap();
    let result = fetch_top_names(&client, 40).await;
    assert!(matches!(result, Err(HarvestError::Registry { .. })));
}

#[tokio::test]
async fn test_fetch_top_names_short_registry() {
    // The registry serves fewer names than requested; the fetcher returns
    // what exists rather than failing.
    let server = MockServer::start().await;
    mock_page(&server, 0, listing_page(0, 3)).await;

    let client = BrowseClient::new(server.uri()).unwrap();
    let names = fetch_top_names(&client, 10).await.unwrap();
    assert_eq!(names, vec!["pkg-0", "pkg-1", "pkg-2"]);
}
