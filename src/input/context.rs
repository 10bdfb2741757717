//! Which screen key events are dispatched against.

use crate::router::Route;

/// Screen kind derived from the current route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    CoinList,
    CoinDetail,
    NotFound,
}

impl Screen {
    pub fn from_route(route: &Route) -> Self {
        match route {
            Route::CoinList => Screen::CoinList,
            Route::Coin { .. } => Screen::CoinDetail,
            Route::NotFound => Screen::NotFound,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_route() {
        assert_eq!(Screen::from_route(&Route::parse("/")), Screen::CoinList);
        assert_eq!(Screen::from_route(&Route::parse("/btc-bitcoin/chart")), Screen::CoinDetail);
        assert_eq!(Screen::from_route(&Route::parse("/a/b/c")), Screen::NotFound);
    }
}
