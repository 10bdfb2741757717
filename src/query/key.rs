//! Query keys and mount identifiers.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Which endpoint a query reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryKind {
    CoinList,
    Info,
    Tickers,
}

impl QueryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            QueryKind::CoinList => "coins",
            QueryKind::Info => "info",
            QueryKind::Tickers => "tickers",
        }
    }
}

/// Identity of a query: endpoint kind plus the coin it is about.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryKey {
    pub kind: QueryKind,
    pub coin_id: Option<String>,
}

impl QueryKey {
    pub fn coin_list() -> Self {
        Self {
            kind: QueryKind::CoinList,
            coin_id: None,
        }
    }

    pub fn info(coin_id: impl Into<String>) -> Self {
        Self {
            kind: QueryKind::Info,
            coin_id: Some(coin_id.into()),
        }
    }

    pub fn tickers(coin_id: impl Into<String>) -> Self {
        Self {
            kind: QueryKind::Tickers,
            coin_id: Some(coin_id.into()),
        }
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.coin_id {
            Some(id) => write!(f, "{}:{}", self.kind.as_str(), id),
            None => write!(f, "{}", self.kind.as_str()),
        }
    }
}

static NEXT_MOUNT: AtomicU64 = AtomicU64::new(1);

/// Identifies one mount of a view. Results tagged with another mount are stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MountId(u64);

impl MountId {
    pub fn next() -> Self {
        MountId(NEXT_MOUNT.fetch_add(1, Ordering::Relaxed))
    }

    pub fn get(&self) -> u64 {
        self.0
    }
}
