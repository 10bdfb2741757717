//! coinlens - a terminal viewer for cryptocurrency prices
//!
//! This library exposes modules for use in integration tests and benches.

pub mod adapters;
pub mod api;
pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod format;
pub mod input;
pub mod logging;
pub mod models;
pub mod query;
pub mod router;
pub mod state;
pub mod terminal;
pub mod traits;
pub mod ui;
pub mod view_state;
