//! Common test utilities for integration tests.
//!
//! ```ignore
//! let mut t = TestApp::start_at("/btc-bitcoin");
//! settle(&mut t.app).await;
//! assert_eq!(t.titles.last().as_deref(), Some("Bitcoin"));
//! ```

#![allow(dead_code)]

pub mod fixtures;

pub use fixtures::*;

use std::sync::Arc;
use std::time::Duration;

use coinlens::adapters::{MockHttpClient, MockResponse, RecordingTitle};
use coinlens::app::App;
use coinlens::config::AppConfig;

/// Base URL the mock client answers for.
pub const BASE: &str = "https://api.test/v1";

pub const REFRESH: Duration = Duration::from_millis(5000);

pub fn info_url(coin_id: &str) -> String {
    format!("{}/coins/{}", BASE, coin_id)
}

pub fn tickers_url(coin_id: &str) -> String {
    format!("{}/tickers/{}", BASE, coin_id)
}

pub fn coins_url() -> String {
    format!("{}/coins", BASE)
}

/// Mock client that knows Bitcoin, Ethereum and the coin list.
pub fn mock_http() -> MockHttpClient {
    let http = MockHttpClient::new();
    http.set_response(&coins_url(), MockResponse::json(coins_json()));
    http.set_response(&info_url("btc-bitcoin"), MockResponse::json(bitcoin_info_json()));
    http.set_response(
        &tickers_url("btc-bitcoin"),
        MockResponse::json(bitcoin_tickers_json(61234.5678)),
    );
    http.set_response(&info_url("eth-ethereum"), MockResponse::json(ethereum_info_json()));
    http.set_response(
        &tickers_url("eth-ethereum"),
        MockResponse::json(ethereum_tickers_json(3100.25)),
    );
    http.set_fallback(MockResponse::status(404, r#"{"error":"id not found"}"#));
    http
}

pub fn test_config(start_path: &str) -> AppConfig {
    AppConfig::new()
        .with_api_url(BASE)
        .with_refresh_interval(REFRESH)
        .with_start_path(start_path)
}

/// App wired to a mock HTTP client and a recording title sink.
pub struct TestApp {
    pub app: App,
    pub http: MockHttpClient,
    pub titles: RecordingTitle,
}

impl TestApp {
    /// Build without starting; nothing is fetched yet.
    pub fn new(start_path: &str, http: MockHttpClient) -> Self {
        let titles = RecordingTitle::new();
        let app = App::new(
            test_config(start_path),
            Arc::new(http.clone()),
            Box::new(titles.clone()),
        );
        Self { app, http, titles }
    }

    /// Build with the default mock and navigate to `start_path`.
    pub fn start_at(start_path: &str) -> Self {
        let mut t = Self::new(start_path, mock_http());
        t.app.start();
        t
    }
}

/// Let spawned fetch tasks run, then apply what they sent.
pub async fn settle(app: &mut App) -> usize {
    for _ in 0..20 {
        tokio::task::yield_now().await;
    }
    app.process_pending_messages()
}

/// Advance the paused clock by `by` and settle.
///
/// Settles first so freshly spawned tasks register their timers against the
/// current instant.
pub async fn advance(app: &mut App, by: Duration) -> usize {
    let before = settle(app).await;
    tokio::time::advance(by).await;
    before + settle(app).await
}
