//! Current location and navigation.

use super::matcher::normalize;
use super::route::{CoinTab, Route};

/// State carried along with a navigation (the coin's display name).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavState {
    pub name: String,
}

impl NavState {
    pub fn named(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// A pathname plus optional navigation state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub pathname: String,
    pub state: Option<NavState>,
}

impl Location {
    pub fn new(pathname: &str, state: Option<NavState>) -> Self {
        Self {
            pathname: normalize(pathname),
            state,
        }
    }

    pub fn root() -> Self {
        Self::new("/", None)
    }

    pub fn is_root(&self) -> bool {
        self.pathname == "/"
    }

    pub fn route(&self) -> Route {
        Route::parse(&self.pathname)
    }

    /// Navigation-supplied display name, if any.
    pub fn nav_name(&self) -> Option<&str> {
        self.state.as_ref().map(|s| s.name.as_str())
    }
}

/// Holds the current location and resolves navigation targets.
#[derive(Debug, Clone)]
pub struct Router {
    location: Location,
}

impl Default for Router {
    fn default() -> Self {
        Self::new(Location::root())
    }
}

impl Router {
    pub fn new(location: Location) -> Self {
        Self { location }
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn route(&self) -> Route {
        self.location.route()
    }

    pub fn is_root(&self) -> bool {
        self.location.is_root()
    }

    /// Resolve `to` against the current location.
    ///
    /// Absolute targets are taken as is. Relative targets resolve against the
    /// coin route (`/:coinId`) when one is active, so `price` from
    /// `/btc-bitcoin/chart` goes to `/btc-bitcoin/price`.
    pub fn resolve(&self, to: &str) -> String {
        if to.starts_with('/') {
            return normalize(to);
        }
        let base = match self.route() {
            Route::Coin { coin_id, .. } => format!("/{}", coin_id),
            _ => self.location.pathname.clone(),
        };
        normalize(&format!("{}/{}", base, to))
    }

    /// Navigate to `to` with `state`. Returns the new location.
    pub fn navigate(&mut self, to: &str, state: Option<NavState>) -> &Location {
        let pathname = self.resolve(to);
        tracing::debug!(from = %self.location.pathname, to = %pathname, "Navigate");
        self.location = Location { pathname, state };
        &self.location
    }

    /// Follow a tab link, carrying the current navigation state along.
    /// Returns `None` when no coin route is active.
    pub fn navigate_tab(&mut self, tab: CoinTab) -> Option<&Location> {
        self.route().coin_id()?;
        let state = self.location.state.clone();
        Some(self.navigate(tab.segment(), state))
    }

    /// Follow the Back link to the root. No-op at the root.
    pub fn back(&mut self) -> bool {
        if self.is_root() {
            return false;
        }
        self.navigate("/", None);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_normalizes() {
        let loc = Location::new("btc-bitcoin/", None);
        assert_eq!(loc.pathname, "/btc-bitcoin");
        assert!(!loc.is_root());
        assert!(Location::root().is_root());
    }

    #[test]
    fn test_resolve_relative_tab_targets() {
        let mut router = Router::default();
        router.navigate("/btc-bitcoin", None);
        assert_eq!(router.resolve("price"), "/btc-bitcoin/price");

        router.navigate("price", None);
        assert_eq!(router.location().pathname, "/btc-bitcoin/price");
        assert_eq!(router.resolve("chart"), "/btc-bitcoin/chart");
    }

    #[test]
    fn test_navigate_tab_carries_state() {
        let mut router = Router::default();
        router.navigate("/btc-bitcoin", Some(NavState::named("Bitcoin")));
        let loc = router.navigate_tab(CoinTab::Chart).unwrap().clone();
        assert_eq!(loc.pathname, "/btc-bitcoin/chart");
        assert_eq!(loc.nav_name(), Some("Bitcoin"));
    }

    #[test]
    fn test_navigate_tab_needs_coin_route() {
        let mut router = Router::default();
        assert!(router.navigate_tab(CoinTab::Price).is_none());
        assert!(router.is_root());
    }

    #[test]
    fn test_back_goes_to_root() {
        let mut router = Router::default();
        assert!(!router.back());

        router.navigate("/btc-bitcoin/price", Some(NavState::named("Bitcoin")));
        assert!(router.back());
        assert!(router.is_root());
        assert_eq!(router.location().state, None);
    }
}
