//! Scripted HTTP client for tests.
//!
//! Answers by exact URL, records every request, and can hold each response
//! back for a while (on the tokio clock, so paused-time tests control it).

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use crate::traits::{Headers, HttpClient, HttpError, Response};

/// A request the mock has seen.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub url: String,
    pub headers: Headers,
}

/// What the mock answers for a URL.
#[derive(Debug, Clone)]
pub enum MockResponse {
    Reply(Response),
    Fail(HttpError),
}

impl MockResponse {
    /// 200 with `value` as a JSON body.
    pub fn json(value: serde_json::Value) -> Self {
        MockResponse::Reply(Response::new(200, value.to_string()).with_content_type("application/json"))
    }

    /// Any status with a raw body.
    pub fn status(status: u16, body: &str) -> Self {
        MockResponse::Reply(Response::new(status, body.to_string()))
    }

    /// No response at all.
    pub fn error(err: HttpError) -> Self {
        MockResponse::Fail(err)
    }
}

#[derive(Debug, Default)]
struct Script {
    routes: HashMap<String, MockResponse>,
    fallback: Option<MockResponse>,
    requests: Vec<RecordedRequest>,
    latency: Duration,
}

/// Mock [`HttpClient`]. Clones share one script, so a test keeps a handle
/// while the app owns another.
///
/// ```ignore
/// let http = MockHttpClient::new();
/// http.set_response(
///     "https://api.test/v1/coins/btc-bitcoin",
///     MockResponse::json(json!({"id": "btc-bitcoin", "name": "Bitcoin", "symbol": "BTC", "rank": 1})),
/// );
/// let api = CoinApi::new("https://api.test/v1", Arc::new(http.clone()));
/// api.fetch_coin_info("btc-bitcoin").await?;
/// assert_eq!(http.request_count("https://api.test/v1/coins/btc-bitcoin"), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockHttpClient {
    script: Arc<Mutex<Script>>,
}

impl MockHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    fn script(&self) -> MutexGuard<'_, Script> {
        // A panicking test thread must not take the other handles down with it
        self.script.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Answer `url` with `response` from now on.
    pub fn set_response(&self, url: &str, response: MockResponse) {
        self.script().routes.insert(url.to_string(), response);
    }

    /// Answer for URLs without their own response. Without one they fail
    /// with [`HttpError::Other`].
    pub fn set_fallback(&self, response: MockResponse) {
        self.script().fallback = Some(response);
    }

    /// Hold every response back by `latency`.
    pub fn set_latency(&self, latency: Duration) {
        self.script().latency = latency;
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.script().requests.clone()
    }

    /// How many requests went to exactly `url`.
    pub fn request_count(&self, url: &str) -> usize {
        self.script().requests.iter().filter(|r| r.url == url).count()
    }
}

#[async_trait]
impl HttpClient for MockHttpClient {
    async fn get(&self, url: &str, headers: &Headers) -> Result<Response, HttpError> {
        let (answer, latency) = {
            let mut script = self.script();
            script.requests.push(RecordedRequest {
                url: url.to_string(),
                headers: headers.clone(),
            });
            let answer = script.routes.get(url).or(script.fallback.as_ref()).cloned();
            (answer, script.latency)
        };

        if !latency.is_zero() {
            tokio::time::sleep(latency).await;
        }

        match answer {
            Some(MockResponse::Reply(response)) => Ok(response),
            Some(MockResponse::Fail(err)) => Err(err),
            None => Err(HttpError::Other(format!("no mock response for {}", url))),
        }
    }
}
