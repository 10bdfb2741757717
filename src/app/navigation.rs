//! Navigation: route changes and the views they mount.

use super::App;
use crate::router::{CoinTab, NavState, Route};
use crate::view_state::CoinDetailView;

impl App {
    /// Navigate to `to` (absolute or relative to the coin route).
    pub fn navigate(&mut self, to: &str, state: Option<NavState>) {
        self.router.navigate(to, state);
        self.sync_route();
    }

    /// Follow the Back link. Returns false at the root.
    pub fn back(&mut self) -> bool {
        if !self.router.back() {
            return false;
        }
        self.sync_route();
        true
    }

    /// Follow a tab link of the coin view. Returns false off the coin route.
    pub fn show_tab(&mut self, tab: CoinTab) -> bool {
        if self.router.navigate_tab(tab).is_none() {
            return false;
        }
        self.sync_route();
        true
    }

    /// Open the coin selected in the list, passing its name along.
    pub fn open_selected(&mut self) -> bool {
        let Some(coin) = self.coin_list.selected_coin() else {
            return false;
        };
        let path = format!("/{}", coin.id);
        let state = NavState::named(coin.name.clone());
        self.navigate(&path, Some(state));
        true
    }

    pub fn toggle_theme(&mut self) {
        self.theme.toggle();
        self.mark_dirty();
    }

    /// Mount or unmount views to match the current route.
    ///
    /// The coin view survives moves between `/:coinId` and its tabs; only a
    /// different identifier replaces it.
    fn sync_route(&mut self) {
        match self.router.route() {
            Route::CoinList => {
                self.unmount_detail();
                self.coin_list.ensure_loaded(&self.api, &self.message_tx);
            }
            Route::Coin { coin_id, .. } => {
                let nav_name = self.router.location().nav_name().map(str::to_string);
                let same_coin = self
                    .coin_detail
                    .as_ref()
                    .is_some_and(|view| view.coin_id() == coin_id);

                if same_coin {
                    if let Some(view) = self.coin_detail.as_mut() {
                        view.set_nav_name(nav_name);
                    }
                } else {
                    self.unmount_detail();
                    let mut view = CoinDetailView::new(coin_id, nav_name);
                    view.mount(
                        self.api.clone(),
                        self.message_tx.clone(),
                        self.config.refresh_interval,
                    );
                    self.coin_detail = Some(view);
                }
            }
            Route::NotFound => {
                tracing::debug!(path = %self.router.location().pathname, "No route matched");
                self.unmount_detail();
            }
        }
        self.update_title();
        self.mark_dirty();
    }

    fn unmount_detail(&mut self) {
        if let Some(mut view) = self.coin_detail.take() {
            view.unmount();
        }
    }
}
