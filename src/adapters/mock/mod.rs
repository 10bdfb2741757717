//! Mock implementations for testing.
//!
//! - [`MockHttpClient`] - HTTP client with configurable responses
//! - [`RecordingTitle`] - title sink that keeps a history

pub mod http;
pub mod title;

pub use http::{MockHttpClient, MockResponse, RecordedRequest};
pub use title::RecordingTitle;
