//! Coin data API.

pub mod client;

pub use client::{CoinApi, DEFAULT_API_URL};
