//! Network-related error types.
//!
//! [`NetworkError`] is what a failed query carries into view state, so it is
//! `Clone` and renders its own user-facing message.

use std::fmt;

use super::category::ErrorCategory;
use crate::traits::HttpError;

/// Network-specific error variants.
#[derive(Debug, Clone, PartialEq)]
pub enum NetworkError {
    /// Connection to the server failed.
    ConnectionFailed { url: String, message: String },

    /// Request timed out.
    Timeout { url: String },

    /// HTTP status error (non-2xx response).
    HttpStatus { status: u16, message: String },

    /// Rate limited by server.
    RateLimited,

    /// Body could not be decoded into the expected shape.
    InvalidResponse { message: String },

    /// Request URL was malformed.
    InvalidUrl { url: String },

    /// Request was cancelled.
    Cancelled,

    /// Generic network error.
    Other { message: String },
}

impl NetworkError {
    /// Check if this error is likely transient.
    pub fn is_retryable(&self) -> bool {
        self.category().is_retryable()
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            NetworkError::ConnectionFailed { .. } | NetworkError::Timeout { .. } => {
                ErrorCategory::Network
            }
            NetworkError::HttpStatus { status, .. } => {
                if *status >= 500 || *status == 408 {
                    ErrorCategory::Server
                } else {
                    ErrorCategory::Client
                }
            }
            NetworkError::RateLimited => ErrorCategory::Server,
            NetworkError::InvalidResponse { .. }
            | NetworkError::InvalidUrl { .. }
            | NetworkError::Cancelled => ErrorCategory::Client,
            NetworkError::Other { .. } => ErrorCategory::Network,
        }
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            NetworkError::ConnectionFailed { .. } => {
                "Unable to reach the coin API. Please check your internet connection.".to_string()
            }
            NetworkError::Timeout { .. } => {
                "The coin API did not answer in time.".to_string()
            }
            NetworkError::HttpStatus { status, .. } => match *status {
                400 => "The request was invalid.".to_string(),
                404 => "This coin was not found.".to_string(),
                500..=599 => "The coin API is experiencing issues. Please try again later.".to_string(),
                _ => format!("The coin API returned an error (HTTP {}).", status),
            },
            NetworkError::RateLimited => {
                "Too many requests. Please wait a moment.".to_string()
            }
            NetworkError::InvalidResponse { .. } => {
                "Received an unexpected response from the coin API.".to_string()
            }
            NetworkError::InvalidUrl { url } => format!("Invalid API URL: {}", url),
            NetworkError::Cancelled => "The request was cancelled.".to_string(),
            NetworkError::Other { message } => format!("Network error: {}", message),
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            NetworkError::ConnectionFailed { .. } => "E_NET_CONN",
            NetworkError::Timeout { .. } => "E_NET_TIMEOUT",
            NetworkError::HttpStatus { .. } => "E_NET_HTTP",
            NetworkError::RateLimited => "E_NET_RATE",
            NetworkError::InvalidResponse { .. } => "E_NET_INVALID",
            NetworkError::InvalidUrl { .. } => "E_NET_URL",
            NetworkError::Cancelled => "E_NET_CANCEL",
            NetworkError::Other { .. } => "E_NET_OTHER",
        }
    }

    /// Map a non-2xx status into an error.
    pub fn from_status(status: u16, body: &str) -> Self {
        if status == 429 {
            return NetworkError::RateLimited;
        }
        let message = body.chars().take(200).collect::<String>();
        NetworkError::HttpStatus { status, message }
    }

    /// Map a transport error for a request to `url`.
    pub fn from_http(err: HttpError, url: &str) -> Self {
        match err {
            HttpError::ConnectionFailed(message) => NetworkError::ConnectionFailed {
                url: url.to_string(),
                message,
            },
            HttpError::Timeout(_) => NetworkError::Timeout {
                url: url.to_string(),
            },
            HttpError::Cancelled => NetworkError::Cancelled,
            HttpError::InvalidUrl(_) => NetworkError::InvalidUrl {
                url: url.to_string(),
            },
            HttpError::Other(message) => NetworkError::Other { message },
        }
    }
}

impl fmt::Display for NetworkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetworkError::ConnectionFailed { url, message } => {
                write!(f, "Connection failed to '{}': {}", url, message)
            }
            NetworkError::Timeout { url } => write!(f, "Request to '{}' timed out", url),
            NetworkError::HttpStatus { status, message } => {
                write!(f, "HTTP {} error: {}", status, message)
            }
            NetworkError::RateLimited => write!(f, "Rate limited"),
            NetworkError::InvalidResponse { message } => {
                write!(f, "Invalid response: {}", message)
            }
            NetworkError::InvalidUrl { url } => write!(f, "Invalid URL: {}", url),
            NetworkError::Cancelled => write!(f, "Request cancelled"),
            NetworkError::Other { message } => write!(f, "Network error: {}", message),
        }
    }
}

impl std::error::Error for NetworkError {}

impl From<serde_json::Error> for NetworkError {
    fn from(err: serde_json::Error) -> Self {
        NetworkError::InvalidResponse {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status() {
        assert_eq!(NetworkError::from_status(429, ""), NetworkError::RateLimited);
        let err = NetworkError::from_status(404, r#"{"error":"id not found"}"#);
        assert!(matches!(err, NetworkError::HttpStatus { status: 404, .. }));
        assert_eq!(err.category(), ErrorCategory::Client);
        assert_eq!(err.user_message(), "This coin was not found.");
    }

    #[test]
    fn test_server_errors_are_retryable() {
        assert!(NetworkError::from_status(503, "").is_retryable());
        assert!(NetworkError::RateLimited.is_retryable());
        assert!(!NetworkError::from_status(400, "").is_retryable());
    }

    #[test]
    fn test_from_http() {
        let err = NetworkError::from_http(HttpError::Timeout("t".into()), "https://x.test/a");
        assert_eq!(
            err,
            NetworkError::Timeout {
                url: "https://x.test/a".to_string()
            }
        );
        assert!(err.is_retryable());
        assert_eq!(err.error_code(), "E_NET_TIMEOUT");
    }

    #[test]
    fn test_json_error_is_invalid_response() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: NetworkError = json_err.into();
        assert!(matches!(err, NetworkError::InvalidResponse { .. }));
        assert!(!err.is_retryable());
    }
}
