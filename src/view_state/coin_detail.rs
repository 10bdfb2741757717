//! State of the coin detail view (`/:coinId` and its tabs).

use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;

use crate::api::CoinApi;
use crate::app::AppMessage;
use crate::error::{FetchResult, NetworkError};
use crate::format::format_price;
use crate::models::{CoinInfo, CoinTickers, UsdQuote};
use crate::query::{MountId, Query, QueryKey, QueryKind, RefreshTask, TaskGuard};

/// What the detail view should draw right now.
#[derive(Debug, Clone, Copy)]
pub enum DetailPhase<'a> {
    /// At least one query has not settled
    Loading,
    /// A query failed before any data arrived
    Failed {
        query: QueryKind,
        error: &'a NetworkError,
    },
    /// Both snapshots present
    Ready {
        info: &'a CoinInfo,
        tickers: &'a CoinTickers,
    },
}

/// Background work owned by a mounted view. Dropping it aborts the tasks.
#[derive(Debug)]
struct DetailTasks {
    _info: TaskGuard,
    refresh: RefreshTask,
}

/// One mount of the coin detail view.
///
/// Snapshots belong to a single coin identifier. Showing another coin means
/// building a new `CoinDetailView`; the old one's tasks stop when it drops.
#[derive(Debug)]
pub struct CoinDetailView {
    coin_id: String,
    nav_name: Option<String>,
    mount: MountId,
    info: Query<CoinInfo>,
    tickers: Query<CoinTickers>,
    tasks: Option<DetailTasks>,
}

impl CoinDetailView {
    /// Pending view for `coin_id`. Nothing is fetched until [`Self::mount`].
    pub fn new(coin_id: impl Into<String>, nav_name: Option<String>) -> Self {
        Self {
            coin_id: coin_id.into(),
            nav_name,
            mount: MountId::next(),
            info: Query::new(),
            tickers: Query::new(),
            tasks: None,
        }
    }

    /// Start the info fetch and the ticker refresh schedule.
    ///
    /// Tickers are fetched immediately and then every `refresh` period until
    /// the view is unmounted or dropped. Calling this again restarts both.
    pub fn mount(&mut self, api: CoinApi, tx: UnboundedSender<AppMessage>, refresh: Duration) {
        let mount = self.mount;
        tracing::info!(coin_id = %self.coin_id, mount = mount.get(), "Mounting coin detail");

        let info_api = api.clone();
        let info_tx = tx.clone();
        let info_id = self.coin_id.clone();
        let info = TaskGuard::spawn(async move {
            let result = info_api.fetch_coin_info(&info_id).await;
            let _ = info_tx.send(AppMessage::CoinInfoLoaded {
                mount,
                key: QueryKey::info(info_id),
                result,
            });
        });

        let coin_id = self.coin_id.clone();
        let refresh = RefreshTask::spawn(refresh, move || {
            let api = api.clone();
            let tx = tx.clone();
            let coin_id = coin_id.clone();
            async move {
                let result = api.fetch_coin_tickers(&coin_id).await;
                let _ = tx.send(AppMessage::CoinTickersLoaded {
                    mount,
                    key: QueryKey::tickers(coin_id),
                    result,
                });
            }
        });

        self.tasks = Some(DetailTasks {
            _info: info,
            refresh,
        });
    }

    /// Stop all background work. Snapshots stay readable.
    pub fn unmount(&mut self) {
        if self.tasks.take().is_some() {
            tracing::info!(coin_id = %self.coin_id, mount = self.mount.get(), "Unmounted coin detail");
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.tasks.is_some()
    }

    /// Period of the running refresh schedule.
    pub fn refresh_period(&self) -> Option<Duration> {
        self.tasks.as_ref().map(|t| t.refresh.period())
    }

    pub fn coin_id(&self) -> &str {
        &self.coin_id
    }

    pub fn mount_id(&self) -> MountId {
        self.mount
    }

    pub fn nav_name(&self) -> Option<&str> {
        self.nav_name.as_deref()
    }

    /// Navigation state is re-read on every route change for this coin.
    pub fn set_nav_name(&mut self, name: Option<String>) {
        self.nav_name = name;
    }

    /// True when a result with this key and mount belongs to this view.
    pub fn accepts(&self, key: &QueryKey, mount: MountId) -> bool {
        mount == self.mount && key.coin_id.as_deref() == Some(self.coin_id.as_str())
    }

    /// Apply an info result. Returns false when it was stale and ignored.
    pub fn apply_info(&mut self, key: &QueryKey, mount: MountId, result: FetchResult<CoinInfo>) -> bool {
        if key.kind != QueryKind::Info || !self.accepts(key, mount) {
            tracing::debug!(%key, mount = mount.get(), "Dropping stale info result");
            return false;
        }
        if let Err(e) = &result {
            tracing::warn!(coin_id = %self.coin_id, error = %e, "Coin info fetch failed");
        }
        self.info.resolve(result);
        true
    }

    /// Apply a ticker result. Returns false when it was stale and ignored.
    pub fn apply_tickers(
        &mut self,
        key: &QueryKey,
        mount: MountId,
        result: FetchResult<CoinTickers>,
    ) -> bool {
        if key.kind != QueryKind::Tickers || !self.accepts(key, mount) {
            tracing::debug!(%key, mount = mount.get(), "Dropping stale tickers result");
            return false;
        }
        if let Err(e) = &result {
            tracing::warn!(coin_id = %self.coin_id, error = %e, "Ticker fetch failed");
        }
        self.tickers.resolve(result);
        true
    }

    pub fn info(&self) -> &Query<CoinInfo> {
        &self.info
    }

    pub fn tickers(&self) -> &Query<CoinTickers> {
        &self.tickers
    }

    /// Either query still waiting for its first result.
    pub fn is_loading(&self) -> bool {
        self.info.is_loading() || self.tickers.is_loading()
    }

    /// A failed query without data wins over a pending one: the view can
    /// never become ready until the user navigates again.
    pub fn phase(&self) -> DetailPhase<'_> {
        if let (None, Some(error)) = (self.info.data(), self.info.error()) {
            return DetailPhase::Failed {
                query: QueryKind::Info,
                error,
            };
        }
        if let (None, Some(error)) = (self.tickers.data(), self.tickers.error()) {
            return DetailPhase::Failed {
                query: QueryKind::Tickers,
                error,
            };
        }
        match (self.info.data(), self.tickers.data()) {
            (Some(info), Some(tickers)) => DetailPhase::Ready { info, tickers },
            _ => DetailPhase::Loading,
        }
    }

    /// Window title for this view.
    pub fn document_title(&self, app_title: &str) -> String {
        if let Some(name) = &self.nav_name {
            return format!("{} | {}", app_title, name);
        }
        if self.is_loading() {
            return "Loading...".to_string();
        }
        match self.info.data() {
            Some(info) => info.name.clone(),
            None => app_title.to_string(),
        }
    }

    /// Heading shown above the overview.
    pub fn header_title(&self) -> String {
        self.nav_name
            .clone()
            .or_else(|| self.info.data().map(|i| i.name.clone()))
            .unwrap_or_else(|| "Loading...".to_string())
    }

    /// Latest USD quote, passed on to the routed tab.
    pub fn quote(&self) -> Option<&UsdQuote> {
        self.tickers.data().map(|t| t.usd())
    }

    /// Price with three decimals, once tickers are in.
    pub fn price_text(&self) -> Option<String> {
        self.quote().map(|q| format_price(q.price))
    }

    /// Most recent error of either query, including refresh failures over
    /// a kept snapshot.
    pub fn last_error(&self) -> Option<&NetworkError> {
        self.tickers.error().or_else(|| self.info.error())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Quotes, UsdQuote};

    fn info(id: &str, name: &str) -> CoinInfo {
        serde_json::from_value(serde_json::json!({
            "id": id, "name": name, "symbol": "BTC", "rank": 1,
            "description": "Digital gold"
        }))
        .unwrap()
    }

    fn tickers(id: &str, price: f64) -> CoinTickers {
        CoinTickers {
            id: id.to_string(),
            name: "Bitcoin".to_string(),
            symbol: "BTC".to_string(),
            rank: 1,
            circulating_supply: 19_000_000.0,
            total_supply: 19_000_000.0,
            max_supply: 21_000_000.0,
            beta_value: None,
            first_data_at: None,
            last_updated: None,
            quotes: Quotes {
                usd: UsdQuote {
                    price,
                    ..Default::default()
                },
            },
        }
    }

    #[test]
    fn test_new_view_is_loading() {
        let view = CoinDetailView::new("btc-bitcoin", None);
        assert!(view.is_loading());
        assert!(matches!(view.phase(), DetailPhase::Loading));
        assert!(!view.is_mounted());
        assert_eq!(view.header_title(), "Loading...");
        assert_eq!(view.document_title("Coin Tracker"), "Loading...");
    }

    #[test]
    fn test_title_prefers_nav_name() {
        let view = CoinDetailView::new("btc-bitcoin", Some("Bitcoin".to_string()));
        assert_eq!(view.document_title("Coin Tracker"), "Coin Tracker | Bitcoin");
        assert_eq!(view.header_title(), "Bitcoin");
    }

    #[test]
    fn test_title_falls_back_to_info_name() {
        let mut view = CoinDetailView::new("btc-bitcoin", None);
        let mount = view.mount_id();
        view.apply_info(&QueryKey::info("btc-bitcoin"), mount, Ok(info("btc-bitcoin", "Bitcoin")));
        // tickers still pending
        assert_eq!(view.document_title("Coin Tracker"), "Loading...");
        assert_eq!(view.header_title(), "Bitcoin");

        view.apply_tickers(&QueryKey::tickers("btc-bitcoin"), mount, Ok(tickers("btc-bitcoin", 1.0)));
        assert_eq!(view.document_title("Coin Tracker"), "Bitcoin");
        assert!(matches!(view.phase(), DetailPhase::Ready { .. }));
    }

    #[test]
    fn test_stale_results_are_dropped() {
        let mut view = CoinDetailView::new("btc-bitcoin", None);
        let mount = view.mount_id();
        let other = MountId::next();

        assert!(!view.apply_info(&QueryKey::info("btc-bitcoin"), other, Ok(info("btc-bitcoin", "Bitcoin"))));
        assert!(!view.apply_info(&QueryKey::info("eth-ethereum"), mount, Ok(info("eth-ethereum", "Ethereum"))));
        assert!(!view.apply_tickers(&QueryKey::info("btc-bitcoin"), mount, Ok(tickers("btc-bitcoin", 1.0))));
        assert!(view.info().data().is_none());
        assert!(view.tickers().data().is_none());
    }

    #[test]
    fn test_price_text_three_decimals() {
        let mut view = CoinDetailView::new("btc-bitcoin", None);
        assert_eq!(view.price_text(), None);
        let mount = view.mount_id();
        view.apply_tickers(&QueryKey::tickers("btc-bitcoin"), mount, Ok(tickers("btc-bitcoin", 1234.5)));
        assert_eq!(view.price_text().as_deref(), Some("1234.500"));
    }

    #[test]
    fn test_failure_without_data_is_error_phase() {
        let mut view = CoinDetailView::new("nope-nope", None);
        let mount = view.mount_id();
        view.apply_info(
            &QueryKey::info("nope-nope"),
            mount,
            Err(NetworkError::HttpStatus {
                status: 404,
                message: "not found".to_string(),
            }),
        );
        match view.phase() {
            DetailPhase::Failed { query, error } => {
                assert_eq!(query, QueryKind::Info);
                assert!(matches!(error, NetworkError::HttpStatus { status: 404, .. }));
            }
            other => panic!("unexpected phase {:?}", other),
        }
        // tickers still pending, so the title keeps the loading text
        assert_eq!(view.document_title("Coin Tracker"), "Loading...");

        view.apply_tickers(&QueryKey::tickers("nope-nope"), mount, Err(NetworkError::RateLimited));
        assert_eq!(view.document_title("Coin Tracker"), "Coin Tracker");
    }

    #[test]
    fn test_refresh_failure_keeps_snapshot() {
        let mut view = CoinDetailView::new("btc-bitcoin", None);
        let mount = view.mount_id();
        let key = QueryKey::tickers("btc-bitcoin");
        view.apply_info(&QueryKey::info("btc-bitcoin"), mount, Ok(info("btc-bitcoin", "Bitcoin")));
        view.apply_tickers(&key, mount, Ok(tickers("btc-bitcoin", 10.0)));
        view.apply_tickers(&key, mount, Err(NetworkError::RateLimited));

        assert!(matches!(view.phase(), DetailPhase::Ready { .. }));
        assert_eq!(view.price_text().as_deref(), Some("10.000"));
        assert_eq!(view.last_error(), Some(&NetworkError::RateLimited));
    }
}
