//! HTTP client trait abstraction.
//!
//! The coin API only ever issues GET requests, so that is the whole surface.
//! Production code uses [`crate::adapters::ReqwestHttpClient`]; tests inject
//! [`crate::adapters::MockHttpClient`].

use async_trait::async_trait;
use bytes::Bytes;
use std::collections::HashMap;
use std::fmt;

/// Request headers, name to value.
pub type Headers = HashMap<String, String>;

/// A settled HTTP exchange. Any status, including 4xx and 5xx.
#[derive(Debug, Clone)]
pub struct Response {
    pub status: u16,
    /// `Content-Type` as sent by the server
    pub content_type: Option<String>,
    pub body: Bytes,
}

impl Response {
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            content_type: None,
            body: body.into(),
        }
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// 2xx
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Body as text. Invalid UTF-8 is replaced, which is fine for error snippets.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Decode the body as JSON.
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }
}

/// Why a request produced no response at all.
#[derive(Debug, Clone, PartialEq)]
pub enum HttpError {
    /// DNS, refused or reset connections
    ConnectionFailed(String),
    /// No complete response within the client's timeout
    Timeout(String),
    Cancelled,
    /// The URL could not be turned into a request
    InvalidUrl(String),
    Other(String),
}

impl fmt::Display for HttpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HttpError::ConnectionFailed(msg) => write!(f, "could not connect: {}", msg),
            HttpError::Timeout(msg) => write!(f, "timed out: {}", msg),
            HttpError::Cancelled => write!(f, "cancelled"),
            HttpError::InvalidUrl(msg) => write!(f, "invalid URL: {}", msg),
            HttpError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for HttpError {}

/// GET-only HTTP client.
///
/// Statuses are not interpreted here; the API client maps them.
///
/// ```ignore
/// use coinlens::traits::{Headers, HttpClient};
///
/// let response = client.get("https://api.coinpaprika.com/v1/coins", &Headers::new()).await?;
/// if response.is_success() {
///     let coins: Vec<CoinSummary> = response.json()?;
/// }
/// ```
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn get(&self, url: &str, headers: &Headers) -> Result<Response, HttpError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_range() {
        assert!(Response::new(200, "").is_success());
        assert!(Response::new(204, "").is_success());
        assert!(!Response::new(304, "").is_success());
        assert!(!Response::new(429, "").is_success());
        assert!(!Response::new(503, "").is_success());
    }

    #[test]
    fn test_text_is_lossy() {
        let response = Response::new(500, Bytes::from_static(b"bad \xff gateway"));
        assert_eq!(response.text(), "bad \u{fffd} gateway");
    }

    #[test]
    fn test_json_decodes_body() {
        let response = Response::new(200, r#"{"id":"btc-bitcoin","rank":1}"#)
            .with_content_type("application/json");
        let value: serde_json::Value = response.json().unwrap();
        assert_eq!(value["rank"], 1);
        assert_eq!(response.content_type.as_deref(), Some("application/json"));
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            HttpError::ConnectionFailed("refused".to_string()).to_string(),
            "could not connect: refused"
        );
        assert_eq!(HttpError::Cancelled.to_string(), "cancelled");
    }
}
