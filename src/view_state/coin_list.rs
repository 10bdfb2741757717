//! State of the coin list shown at `/`.

use tokio::sync::mpsc::UnboundedSender;

use crate::api::CoinApi;
use crate::app::AppMessage;
use crate::error::FetchResult;
use crate::models::{top_ranked, CoinSummary};
use crate::query::{MountId, Query, TaskGuard};

/// Ranked coin list with a clamped selection.
///
/// Lives for the whole session: the list is fetched on the first visit to
/// `/` and kept, and a visit after a failed fetch tries again.
#[derive(Debug)]
pub struct CoinListView {
    mount: MountId,
    coins: Query<Vec<CoinSummary>>,
    selected: usize,
    limit: usize,
    task: Option<TaskGuard>,
}

impl CoinListView {
    pub fn new(limit: usize) -> Self {
        Self {
            mount: MountId::next(),
            coins: Query::new(),
            selected: 0,
            limit,
            task: None,
        }
    }

    /// Start a fetch unless data is present or one is already in flight.
    /// Returns true when a fetch was started.
    pub fn ensure_loaded(&mut self, api: &CoinApi, tx: &UnboundedSender<AppMessage>) -> bool {
        if self.coins.data().is_some() {
            return false;
        }
        if let Some(task) = &self.task {
            if !task.is_finished() {
                return false;
            }
        }
        // A retry gets a fresh mount so a late result of the old fetch is ignored.
        self.mount = MountId::next();
        self.coins = Query::new();
        let mount = self.mount;
        let api = api.clone();
        let tx = tx.clone();
        tracing::info!(mount = mount.get(), "Fetching coin list");
        self.task = Some(TaskGuard::spawn(async move {
            let result = api.fetch_coins().await;
            let _ = tx.send(AppMessage::CoinListLoaded { mount, result });
        }));
        true
    }

    /// Apply a fetch result. Returns false when it was stale and ignored.
    pub fn apply(&mut self, mount: MountId, result: FetchResult<Vec<CoinSummary>>) -> bool {
        if mount != self.mount {
            tracing::debug!(mount = mount.get(), "Dropping stale coin list result");
            return false;
        }
        let limit = self.limit;
        match &result {
            Ok(coins) => tracing::info!(total = coins.len(), "Coin list loaded"),
            Err(e) => tracing::warn!(error = %e, "Coin list fetch failed"),
        }
        self.coins.resolve(result.map(|coins| top_ranked(coins, limit)));
        self.clamp_selection();
        true
    }

    pub fn mount_id(&self) -> MountId {
        self.mount
    }

    pub fn query(&self) -> &Query<Vec<CoinSummary>> {
        &self.coins
    }

    pub fn coins(&self) -> &[CoinSummary] {
        self.coins.data().map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn selected_coin(&self) -> Option<&CoinSummary> {
        self.coins().get(self.selected)
    }

    pub fn select_next(&mut self) {
        let len = self.coins().len();
        if self.selected + 1 < len {
            self.selected += 1;
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    fn clamp_selection(&mut self) {
        let len = self.coins().len();
        self.selected = self.selected.min(len.saturating_sub(1));
    }
}
