//! AppMessage enum for async communication within the application.

use crate::error::FetchResult;
use crate::models::{CoinInfo, CoinSummary, CoinTickers};
use crate::query::{MountId, QueryKey};

/// Results delivered by background fetch tasks.
///
/// Every variant carries the [`MountId`] of the view that started the fetch;
/// the app drops messages whose mount is no longer current.
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// The coin list fetch settled
    CoinListLoaded {
        mount: MountId,
        result: FetchResult<Vec<CoinSummary>>,
    },
    /// A coin info fetch settled
    CoinInfoLoaded {
        mount: MountId,
        key: QueryKey,
        result: FetchResult<CoinInfo>,
    },
    /// A ticker fetch (initial or refresh) settled
    CoinTickersLoaded {
        mount: MountId,
        key: QueryKey,
        result: FetchResult<CoinTickers>,
    },
}

impl AppMessage {
    pub fn mount(&self) -> MountId {
        match self {
            AppMessage::CoinListLoaded { mount, .. }
            | AppMessage::CoinInfoLoaded { mount, .. }
            | AppMessage::CoinTickersLoaded { mount, .. } => *mount,
        }
    }

    /// Short label for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            AppMessage::CoinListLoaded { .. } => "coin_list",
            AppMessage::CoinInfoLoaded { .. } => "coin_info",
            AppMessage::CoinTickersLoaded { .. } => "coin_tickers",
        }
    }

    pub fn is_ok(&self) -> bool {
        match self {
            AppMessage::CoinListLoaded { result, .. } => result.is_ok(),
            AppMessage::CoinInfoLoaded { result, .. } => result.is_ok(),
            AppMessage::CoinTickersLoaded { result, .. } => result.is_ok(),
        }
    }
}
