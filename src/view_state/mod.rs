//! View-only state for the routed screens.
//!
//! Each view owns its queries and background tasks. The [`crate::app::App`]
//! decides which views are mounted; rendering only reads from them.
//!
//! - [`CoinListView`]: ranked list at `/`
//! - [`CoinDetailView`]: coin overview at `/:coinId` and its tabs

mod coin_detail;
mod coin_list;

pub use coin_detail::{CoinDetailView, DetailPhase};
pub use coin_list::CoinListView;
