//! Result type aliases.

use super::app_error::AppError;
use super::network::NetworkError;

/// Result for startup and UI loop operations.
pub type AppResult<T> = Result<T, AppError>;

/// Result of a single API query.
pub type FetchResult<T> = Result<T, NetworkError>;
