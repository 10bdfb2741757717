//! Message and command handlers.

use crossterm::event::KeyEvent;

use super::{App, AppMessage};
use crate::input::{Command, Screen};

impl App {
    /// Apply a background fetch result. Stale results are dropped.
    pub fn handle_message(&mut self, msg: AppMessage) {
        tracing::debug!(kind = msg.kind(), mount = msg.mount().get(), ok = msg.is_ok(), "Message");

        let applied = match msg {
            AppMessage::CoinListLoaded { mount, result } => self.coin_list.apply(mount, result),
            AppMessage::CoinInfoLoaded { mount, key, result } => match self.coin_detail.as_mut() {
                Some(view) => view.apply_info(&key, mount, result),
                None => false,
            },
            AppMessage::CoinTickersLoaded { mount, key, result } => {
                match self.coin_detail.as_mut() {
                    Some(view) => view.apply_tickers(&key, mount, result),
                    None => false,
                }
            }
        };

        if applied {
            self.update_title();
            self.mark_dirty();
        }
    }

    /// Dispatch a key press through the keybindings.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if let Some(cmd) = self.registry.dispatch(key, self.screen()) {
            self.handle_command(cmd);
        }
    }

    pub fn handle_command(&mut self, cmd: Command) {
        tracing::debug!(?cmd, "Command");
        match cmd {
            Command::Quit => self.quit(),
            Command::ToggleTheme => self.toggle_theme(),
            Command::Back => {
                self.back();
            }
            Command::MoveUp if self.screen() == Screen::CoinList => {
                self.coin_list.select_previous();
            }
            Command::MoveDown if self.screen() == Screen::CoinList => {
                self.coin_list.select_next();
            }
            Command::OpenSelected if self.screen() == Screen::CoinList => {
                self.open_selected();
            }
            Command::ShowTab(tab) => {
                self.show_tab(tab);
            }
            Command::MoveUp | Command::MoveDown | Command::OpenSelected | Command::Noop => {}
        }
        if cmd.needs_redraw() {
            self.mark_dirty();
        }
    }
}
