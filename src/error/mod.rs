//! Error handling for coinlens.
//!
//! Errors are layered:
//!
//! | Type | Where it lives |
//! |------|----------------|
//! | [`crate::traits::HttpError`] | transport adapters |
//! | [`NetworkError`] | API client results and query state |
//! | [`AppError`] | startup, config, terminal; reported via color-eyre |
//!
//! Each layer can be asked for its [`ErrorCategory`].

mod app_error;
mod category;
mod network;
mod result;

pub use app_error::AppError;
pub use category::ErrorCategory;
pub use network::NetworkError;
pub use result::{AppResult, FetchResult};
