//! Query layer: keyed fetch results and their lifetimes.
//!
//! - [`Query`] holds the loading / success / error state for one fetch
//! - [`QueryKey`] and [`MountId`] tag results so stale ones can be dropped
//! - [`RefreshTask`] and [`TaskGuard`] tie background fetches to a mount

pub mod key;
pub mod refresh;
pub mod state;

pub use key::{MountId, QueryKey, QueryKind};
pub use refresh::{RefreshTask, TaskGuard};
pub use state::{Query, QueryStatus};
