//! Application state and the logic that drives it.
//!
//! `App` owns the router, the theme flag and the mounted views. Background
//! fetches report back through [`AppMessage`]s on an unbounded channel; the
//! main loop feeds them to [`App::handle_message`].

mod handlers;
mod messages;
mod navigation;

pub use messages::AppMessage;

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::api::CoinApi;
use crate::config::AppConfig;
use crate::input::{CommandRegistry, Screen};
use crate::router::{Location, Router};
use crate::state::ThemeState;
use crate::traits::{HttpClient, TitleSink};
use crate::view_state::{CoinDetailView, CoinListView};

/// Main application state.
pub struct App {
    config: AppConfig,
    api: CoinApi,
    router: Router,
    theme: ThemeState,
    coin_list: CoinListView,
    coin_detail: Option<CoinDetailView>,
    registry: CommandRegistry,
    title_sink: Box<dyn TitleSink>,
    last_title: Option<String>,
    /// Sender handed to background fetch tasks
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    /// Receiver, taken by the main loop
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    /// Set when the screen must be drawn again
    pub needs_redraw: bool,
    pub should_quit: bool,
    /// Animation tick counter
    pub tick_count: u64,
}

impl App {
    /// Build the app. Nothing is fetched until [`App::start`].
    pub fn new(config: AppConfig, http: Arc<dyn HttpClient>, title_sink: Box<dyn TitleSink>) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        let api = CoinApi::new(config.api_url.clone(), http);
        Self {
            api,
            router: Router::default(),
            theme: ThemeState::new(!config.light_theme),
            coin_list: CoinListView::new(config.list_limit),
            coin_detail: None,
            registry: CommandRegistry::new(),
            title_sink,
            last_title: None,
            message_tx,
            message_rx: Some(message_rx),
            needs_redraw: true,
            should_quit: false,
            tick_count: 0,
            config,
        }
    }

    /// Navigate to the configured start path. Must run inside a tokio runtime.
    pub fn start(&mut self) {
        let start = self.config.start_path.clone();
        tracing::info!(start = %start, api = %self.api.base_url(), "Starting");
        self.navigate(&start, None);
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    pub fn location(&self) -> &Location {
        self.router.location()
    }

    pub fn theme(&self) -> ThemeState {
        self.theme
    }

    pub fn coin_list(&self) -> &CoinListView {
        &self.coin_list
    }

    pub fn coin_detail(&self) -> Option<&CoinDetailView> {
        self.coin_detail.as_ref()
    }

    /// Screen the current route maps to.
    pub fn screen(&self) -> Screen {
        Screen::from_route(&self.router.route())
    }

    /// Anything on screen waiting for its first result.
    pub fn is_loading(&self) -> bool {
        match self.screen() {
            Screen::CoinList => self.coin_list.query().is_loading(),
            Screen::CoinDetail => self.coin_detail.as_ref().is_some_and(|v| v.is_loading()),
            Screen::NotFound => false,
        }
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    pub fn quit(&mut self) {
        tracing::info!("Quit requested");
        self.should_quit = true;
    }

    /// Advance animations. Only spinners animate, so only loading screens redraw.
    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
        if self.is_loading() {
            self.mark_dirty();
        }
    }

    /// Window title for the current route.
    pub fn document_title(&self) -> String {
        let app_title = self.config.app_title.as_str();
        match self.screen() {
            Screen::CoinList => app_title.to_string(),
            Screen::CoinDetail => match &self.coin_detail {
                Some(view) => view.document_title(app_title),
                None => "Loading...".to_string(),
            },
            Screen::NotFound => format!("{} | Not found", app_title),
        }
    }

    /// Push the window title to the sink when it changed.
    pub(crate) fn update_title(&mut self) {
        let title = self.document_title();
        if self.last_title.as_deref() != Some(title.as_str()) {
            tracing::debug!(title = %title, "Window title");
            self.title_sink.set_title(&title);
            self.last_title = Some(title);
        }
    }

    /// Apply every message already queued. Returns how many were handled.
    ///
    /// Only works while the receiver is still owned by the app.
    pub fn process_pending_messages(&mut self) -> usize {
        let mut pending = Vec::new();
        if let Some(rx) = self.message_rx.as_mut() {
            while let Ok(msg) = rx.try_recv() {
                pending.push(msg);
            }
        }
        let count = pending.len();
        for msg in pending {
            self.handle_message(msg);
        }
        count
    }
}
