//! Top-level application error.

use thiserror::Error;

use super::category::ErrorCategory;
use super::network::NetworkError;

/// Errors that abort startup or the UI loop.
///
/// Query failures never become an `AppError`; they stay inside view state.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("terminal error: {0}")]
    Terminal(#[from] std::io::Error),

    #[error("invalid configuration: {message}")]
    Config { message: String },

    #[error("logging setup failed: {message}")]
    Logging { message: String },

    #[error(transparent)]
    Network(#[from] NetworkError),
}

impl AppError {
    pub fn config(message: impl Into<String>) -> Self {
        AppError::Config {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            AppError::Terminal(_) | AppError::Logging { .. } => ErrorCategory::System,
            AppError::Config { .. } => ErrorCategory::Configuration,
            AppError::Network(e) => e.category(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::Other, "tty gone");
        let err: AppError = io_err.into();
        assert_eq!(err.category(), ErrorCategory::System);
        assert_eq!(err.to_string(), "terminal error: tty gone");
    }

    #[test]
    fn test_config_error() {
        let err = AppError::config("refresh interval must be positive");
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert!(err.to_string().contains("refresh interval"));
    }

    #[test]
    fn test_network_error_is_transparent() {
        let err: AppError = NetworkError::RateLimited.into();
        assert_eq!(err.to_string(), "Rate limited");
        assert_eq!(err.category(), ErrorCategory::Server);
    }
}
