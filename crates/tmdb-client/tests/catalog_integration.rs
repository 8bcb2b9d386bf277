//! Integration tests for the catalog client
//!
//! These tests use wiremock to stand in for the TMDB API and exercise the
//! full request/response cycle, including headers and error mapping.

use serde_json::json;
use tmdb_client::{CatalogClient, ClientConfig, Error};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn movie_body() -> serde_json::Value {
    json!({
        "id": 42,
        "title": "The Answer",
        "overview": "A movie about everything.",
        "backdrop_path": null,
        "poster_path": "/poster.jpg",
        "vote_average": 7.666,
        "vote_count": 1200,
        "popularity": 55.5,
        "original_language": "en",
        "release_date": "1979-10-12"
    })
}

fn client_for(server: &MockServer) -> CatalogClient {
    let config = ClientConfig::new("test-token").with_base_url(server.uri());
    CatalogClient::new(config).unwrap()
}

// =============================================================================
// Successful Request Tests
// =============================================================================

#[tokio::test]
async fn test_movie_detail_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/movie/42"))
        .and(header("authorization", "Bearer test-token"))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(movie_body()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let movie = client.movie_detail("42").await.unwrap();

    assert_eq!(movie.id, 42);
    assert_eq!(movie.title, "The Answer");
    assert_eq!(movie.hero_image_path(), Some("/poster.jpg"));
}

#[tokio::test]
async fn test_movie_list_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/movie/42/recommendations"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "page": 1,
            "results": [{"id": 7, "title": "Seven", "poster_path": "/7.jpg"}],
            "total_pages": 1,
            "total_results": 1
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let page = client.movie_list("/movie/42/recommendations").await.unwrap();

    assert_eq!(page.page, 1);
    assert_eq!(page.results[0].title, "Seven");
}

#[tokio::test]
async fn test_default_headers_are_sent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/movie/42"))
        .and(header("x-trace", "abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(movie_body()))
        .mount(&mock_server)
        .await;

    let config = ClientConfig::new("test-token")
        .with_base_url(mock_server.uri())
        .with_header("X-Trace", "abc");
    let client = CatalogClient::new(config).unwrap();

    assert!(client.movie_detail("42").await.is_ok());
}

// =============================================================================
// Error Handling Tests
// =============================================================================

#[tokio::test]
async fn test_404_maps_to_api_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/movie/0"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "success": false,
            "status_code": 34,
            "status_message": "The resource you requested could not be found."
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let error = client.movie_detail("0").await.unwrap_err();

    match error {
        Error::Api { status, message } => {
            assert_eq!(status, 404);
            assert!(message.contains("could not be found"));
        }
        other => panic!("expected API error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_500_with_plain_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/movie/42"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let error = client.movie_detail("42").await.unwrap_err();

    assert!(matches!(error, Error::Api { status: 500, ref message } if message.contains("upstream exploded")));
}

#[tokio::test]
async fn test_malformed_body_is_decode_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/movie/42"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let error = client.movie_detail("42").await.unwrap_err();

    assert!(error.is_decode());
}

#[tokio::test]
async fn test_unreachable_host_is_network_error() {
    // Nothing listens on port 1
    let config = ClientConfig::new("test-token").with_base_url("http://127.0.0.1:1");
    let client = CatalogClient::new(config).unwrap();

    let error = client.movie_detail("42").await.unwrap_err();
    assert!(matches!(error, Error::Network(_)));
}
