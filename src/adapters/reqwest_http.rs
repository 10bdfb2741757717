//! Reqwest-based HTTP client adapter.

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use std::time::Duration;

use crate::config::DEFAULT_HTTP_TIMEOUT;
use crate::traits::{Headers, HttpClient, HttpError, Response};

/// [`HttpClient`] backed by a shared `reqwest::Client` (rustls).
///
/// ```ignore
/// use coinlens::adapters::ReqwestHttpClient;
///
/// let http = ReqwestHttpClient::with_timeout(Duration::from_secs(10));
/// let api = CoinApi::new(DEFAULT_API_URL, Arc::new(http));
/// ```
#[derive(Debug, Clone)]
pub struct ReqwestHttpClient {
    client: reqwest::Client,
}

impl ReqwestHttpClient {
    /// Client whose requests give up after `timeout`.
    ///
    /// Falls back to reqwest's default client if the builder fails, which
    /// only happens when the TLS backend cannot initialise.
    pub fn with_timeout(timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("coinlens/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!(error = %e, "Falling back to default HTTP client");
                reqwest::Client::new()
            });
        Self { client }
    }
}

impl Default for ReqwestHttpClient {
    fn default() -> Self {
        Self::with_timeout(DEFAULT_HTTP_TIMEOUT)
    }
}

/// Sort a reqwest failure into the transport error kinds.
fn classify(err: reqwest::Error) -> HttpError {
    if err.is_timeout() {
        HttpError::Timeout(err.to_string())
    } else if err.is_connect() {
        HttpError::ConnectionFailed(err.to_string())
    } else if err.is_builder() {
        HttpError::InvalidUrl(err.to_string())
    } else {
        HttpError::Other(err.to_string())
    }
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn get(&self, url: &str, headers: &Headers) -> Result<Response, HttpError> {
        let request = headers
            .iter()
            .fold(self.client.get(url), |req, (name, value)| req.header(name, value));

        let reply = request.send().await.map_err(classify)?;
        let status = reply.status().as_u16();
        let content_type = reply
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        // The body read is covered by the same timeout
        let body = reply.bytes().await.map_err(classify)?;

        let response = Response::new(status, body);
        Ok(match content_type {
            Some(ct) => response.with_content_type(ct),
            None => response,
        })
    }
}
