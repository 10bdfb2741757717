//! Concrete implementations of trait abstractions.
//!
//! # Adapters
//!
//! - [`ReqwestHttpClient`] - HTTP client using reqwest
//! - [`TerminalTitle`] - window title via crossterm
//!
//! The [`mock`] submodule provides test doubles for both.

pub mod mock;
pub mod reqwest_http;
pub mod terminal_title;

pub use mock::{MockHttpClient, MockResponse, RecordingTitle};
pub use reqwest_http::ReqwestHttpClient;
pub use terminal_title::TerminalTitle;
