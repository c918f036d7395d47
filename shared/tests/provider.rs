//! Provider client tests against a mock HTTP server.

use shared::{AlphaVantageClient, IngestError};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_fetch_passes_query_params_and_returns_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/query"))
        .and(query_param("function", "DIVIDENDS"))
        .and(query_param("symbol", "IBM"))
        .and(query_param("apikey", "demo"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"symbol":"IBM","data":[]}"#))
        .expect(1)
        .mount(&server)
        .await;

    let client = AlphaVantageClient::with_base_url(&server.uri());
    let body = client.fetch("IBM", "demo", "DIVIDENDS").await.unwrap();

    assert_eq!(body, br#"{"symbol":"IBM","data":[]}"#);
}

#[tokio::test]
async fn test_non_success_status_is_surfaced() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/query"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = AlphaVantageClient::with_base_url(&server.uri());
    let err = client.fetch("IBM", "demo", "DIVIDENDS").await.unwrap_err();

    assert!(matches!(err, IngestError::UpstreamStatus { status: 503 }));
}

#[tokio::test]
async fn test_unreachable_provider_is_a_transport_error() {
    let client = AlphaVantageClient::with_base_url("http://127.0.0.1:9");
    let err = client.fetch("IBM", "demo", "DIVIDENDS").await.unwrap_err();

    assert!(matches!(err, IngestError::Transport(_)));
}
