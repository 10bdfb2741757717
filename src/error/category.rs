//! Error category classification.

use std::fmt;

/// High-level categorization of errors for handling decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Connection, DNS, timeout. Transient.
    Network,

    /// Upstream API errors (HTTP 5xx, rate limiting). Transient.
    Server,

    /// The request itself was wrong (unknown coin, bad URL) or the
    /// response could not be understood. Not retryable.
    Client,

    /// Terminal and filesystem errors.
    System,

    /// Invalid settings or flags.
    Configuration,
}

impl ErrorCategory {
    /// Returns true if errors in this category are generally transient.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ErrorCategory::Network | ErrorCategory::Server)
    }

    /// Returns a short label for the category suitable for logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Network => "network",
            ErrorCategory::Server => "server",
            ErrorCategory::Client => "client",
            ErrorCategory::System => "system",
            ErrorCategory::Configuration => "configuration",
        }
    }

    /// Returns suggested recovery actions for this category.
    pub fn recovery_hint(&self) -> &'static str {
        match self {
            ErrorCategory::Network => "Check your internet connection. Data refreshes automatically.",
            ErrorCategory::Server => "The coin API is having trouble. Data refreshes automatically.",
            ErrorCategory::Client => "Pick another coin from the list.",
            ErrorCategory::System => "Check terminal and file permissions.",
            ErrorCategory::Configuration => "Check the command line flags and COINLENS_* variables.",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retryable_categories() {
        assert!(ErrorCategory::Network.is_retryable());
        assert!(ErrorCategory::Server.is_retryable());
        assert!(!ErrorCategory::Client.is_retryable());
        assert!(!ErrorCategory::Configuration.is_retryable());
    }

    #[test]
    fn test_display_uses_label() {
        assert_eq!(ErrorCategory::Server.to_string(), "server");
    }
}
