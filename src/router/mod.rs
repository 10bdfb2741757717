//! In-process path router.
//!
//! Paths look like browser paths (`/btc-bitcoin/price`) and carry optional
//! navigation state. Views read the current [`Route`] and never own the
//! router; the [`crate::app::App`] does.

pub mod location;
pub mod matcher;
pub mod route;

pub use location::{Location, NavState, Router};
pub use matcher::{match_path, normalize, Params};
pub use route::{CoinTab, Route};
