//! Trait abstractions for dependency injection and testability.
//!
//! # Traits
//!
//! - [`HttpClient`] - HTTP GET operations
//! - [`TitleSink`] - window title output

pub mod http;
pub mod title;

pub use http::{Headers, HttpClient, HttpError, Response};
pub use title::TitleSink;
