//! Route table.
//!
//! | Path | Route |
//! |------|-------|
//! | `/` | coin list |
//! | `/:coinId` | coin detail, no tab |
//! | `/:coinId/price` | coin detail, price tab |
//! | `/:coinId/chart` | coin detail, chart tab |

use super::matcher::match_path;

/// Nested sub-view of the coin detail route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CoinTab {
    Price,
    Chart,
}

impl CoinTab {
    pub const ALL: [CoinTab; 2] = [CoinTab::Price, CoinTab::Chart];

    /// Relative path segment used as the tab's link target.
    pub fn segment(&self) -> &'static str {
        match self {
            CoinTab::Price => "price",
            CoinTab::Chart => "chart",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CoinTab::Price => "Price",
            CoinTab::Chart => "Chart",
        }
    }

    fn pattern(&self) -> &'static str {
        match self {
            CoinTab::Price => ":coinId/price",
            CoinTab::Chart => ":coinId/chart",
        }
    }

    /// Whether this tab's pattern matches `pathname`.
    pub fn is_active(&self, pathname: &str) -> bool {
        match_path(self.pattern(), pathname).is_some()
    }

    /// The tab matching `pathname`, if any. At most one can match.
    pub fn active(pathname: &str) -> Option<CoinTab> {
        CoinTab::ALL.into_iter().find(|tab| tab.is_active(pathname))
    }
}

/// A resolved route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    CoinList,
    Coin {
        coin_id: String,
        tab: Option<CoinTab>,
    },
    NotFound,
}

impl Route {
    pub fn parse(pathname: &str) -> Route {
        if match_path("/", pathname).is_some() {
            return Route::CoinList;
        }
        if let Some(params) = match_path(":coinId", pathname) {
            if let Some(coin_id) = params.get("coinId") {
                return Route::Coin {
                    coin_id: coin_id.clone(),
                    tab: None,
                };
            }
        }
        for tab in CoinTab::ALL {
            if let Some(params) = match_path(tab.pattern(), pathname) {
                if let Some(coin_id) = params.get("coinId") {
                    return Route::Coin {
                        coin_id: coin_id.clone(),
                        tab: Some(tab),
                    };
                }
            }
        }
        Route::NotFound
    }

    pub fn coin_id(&self) -> Option<&str> {
        match self {
            Route::Coin { coin_id, .. } => Some(coin_id),
            _ => None,
        }
    }
}
