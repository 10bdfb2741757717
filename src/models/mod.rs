//! Data models for the coin API.
//!
//! - [`CoinSummary`] / [`CoinInfo`] - coin listing and metadata
//! - [`CoinTickers`] / [`UsdQuote`] - live market snapshot

pub mod coin;
pub mod ticker;

pub use coin::{top_ranked, CoinInfo, CoinSummary};
pub use ticker::{CoinTickers, Quotes, UsdQuote};
