//! Coin API client against a real HTTP server (wiremock).

mod common;

use std::sync::Arc;
use std::time::Duration;

use coinlens::adapters::ReqwestHttpClient;
use coinlens::api::CoinApi;
use coinlens::error::NetworkError;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use common::{bitcoin_info_json, bitcoin_tickers_json, coins_json};

fn api_for(server: &MockServer) -> CoinApi {
    let http = ReqwestHttpClient::with_timeout(Duration::from_secs(2));
    CoinApi::new(format!("{}/v1", server.uri()), Arc::new(http))
}

#[tokio::test]
async fn test_fetch_coin_info_sends_accept_header() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/coins/btc-bitcoin"))
        .and(header("Accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(bitcoin_info_json()))
        .expect(1)
        .mount(&server)
        .await;

    let info = api_for(&server).fetch_coin_info("btc-bitcoin").await.unwrap();
    assert_eq!(info.name, "Bitcoin");
    assert_eq!(info.symbol, "BTC");
    assert_eq!(info.rank, 1);
    assert!(info.description_text().starts_with("Bitcoin is"));
}

#[tokio::test]
async fn test_fetch_tickers_decodes_usd_quote() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/tickers/btc-bitcoin"))
        .respond_with(ResponseTemplate::new(200).set_body_json(bitcoin_tickers_json(61234.5678)))
        .mount(&server)
        .await;

    let tickers = api_for(&server).fetch_coin_tickers("btc-bitcoin").await.unwrap();
    assert_eq!(tickers.usd().price, 61234.5678);
    assert_eq!(tickers.total_supply, 19_500_000.0);
    assert_eq!(tickers.max_supply, 21_000_000.0);
    assert_eq!(tickers.usd().percent_change_24h, 1.5);
}

#[tokio::test]
async fn test_fetch_coins_returns_full_listing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/coins"))
        .respond_with(ResponseTemplate::new(200).set_body_json(coins_json()))
        .mount(&server)
        .await;

    let coins = api_for(&server).fetch_coins().await.unwrap();
    // Filtering happens in the list view, not the client
    assert_eq!(coins.len(), 5);
}

#[tokio::test]
async fn test_not_found_maps_to_http_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/coins/nope-coin"))
        .respond_with(ResponseTemplate::new(404).set_body_string(r#"{"error":"id not found"}"#))
        .mount(&server)
        .await;

    let err = api_for(&server).fetch_coin_info("nope-coin").await.unwrap_err();
    match &err {
        NetworkError::HttpStatus { status, message } => {
            assert_eq!(*status, 404);
            assert!(message.contains("id not found"));
        }
        other => panic!("expected HttpStatus, got {:?}", other),
    }
    assert_eq!(err.user_message(), "This coin was not found.");
    assert!(!err.is_retryable());
}

#[tokio::test]
async fn test_rate_limit_maps_to_rate_limited() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/tickers/btc-bitcoin"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&server)
        .await;

    let err = api_for(&server).fetch_coin_tickers("btc-bitcoin").await.unwrap_err();
    assert_eq!(err, NetworkError::RateLimited);
    assert!(err.is_retryable());
}

#[tokio::test]
async fn test_server_error_is_retryable() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/tickers/btc-bitcoin"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .mount(&server)
        .await;

    let err = api_for(&server).fetch_coin_tickers("btc-bitcoin").await.unwrap_err();
    assert!(matches!(err, NetworkError::HttpStatus { status: 503, .. }));
    assert!(err.is_retryable());
}

#[tokio::test]
async fn test_malformed_body_maps_to_invalid_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/coins/btc-bitcoin"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let err = api_for(&server).fetch_coin_info("btc-bitcoin").await.unwrap_err();
    assert!(matches!(err, NetworkError::InvalidResponse { .. }));
}

#[tokio::test]
async fn test_slow_server_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/tickers/btc-bitcoin"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(bitcoin_tickers_json(1.0))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let http = ReqwestHttpClient::with_timeout(Duration::from_millis(200));
    let api = CoinApi::new(format!("{}/v1", server.uri()), Arc::new(http));
    let err = api.fetch_coin_tickers("btc-bitcoin").await.unwrap_err();
    assert!(matches!(err, NetworkError::Timeout { .. }), "got {:?}", err);
}

#[tokio::test]
async fn test_unreachable_host_is_connection_failure() {
    // Bind and drop a server so the port is known to be closed
    let uri = {
        let server = MockServer::start().await;
        server.uri()
    };

    let http = ReqwestHttpClient::with_timeout(Duration::from_secs(2));
    let api = CoinApi::new(format!("{}/v1", uri), Arc::new(http));
    let err = api.fetch_coins().await.unwrap_err();
    assert!(matches!(err, NetworkError::ConnectionFailed { .. }), "got {:?}", err);
}
