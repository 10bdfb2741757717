//! Default keybindings for the application.
//!
//! Maps key combinations to commands, globally and per screen.

use crossterm::event::{KeyCode, KeyModifiers};
use std::collections::HashMap;

use super::command::Command;
use super::context::Screen;
use crate::router::CoinTab;

/// A key code plus modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyCombo {
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Key with no modifiers.
    pub const fn plain(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    /// Key with Control held.
    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::CONTROL)
    }
}

/// Keybinding tables.
#[derive(Debug, Clone)]
pub struct KeybindingConfig {
    /// Active on every screen
    pub global: HashMap<KeyCombo, Command>,
    /// Active on one screen, checked after the global table
    pub screen: HashMap<Screen, HashMap<KeyCombo, Command>>,
}

impl Default for KeybindingConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl KeybindingConfig {
    pub fn new() -> Self {
        let mut config = Self {
            global: HashMap::new(),
            screen: HashMap::new(),
        };
        config.setup_global_bindings();
        config.setup_screen_bindings();
        config
    }

    fn setup_global_bindings(&mut self) {
        self.global.insert(KeyCombo::ctrl(KeyCode::Char('c')), Command::Quit);
        self.global.insert(KeyCombo::plain(KeyCode::Char('q')), Command::Quit);
        self.global
            .insert(KeyCombo::plain(KeyCode::Char('t')), Command::ToggleTheme);

        // Back link; ignored at the root by the router itself
        self.global.insert(KeyCombo::plain(KeyCode::Char('b')), Command::Back);
        self.global.insert(KeyCombo::plain(KeyCode::Esc), Command::Back);
        self.global.insert(KeyCombo::plain(KeyCode::Backspace), Command::Back);
    }

    fn setup_screen_bindings(&mut self) {
        let mut list = HashMap::new();
        list.insert(KeyCombo::plain(KeyCode::Up), Command::MoveUp);
        list.insert(KeyCombo::plain(KeyCode::Char('k')), Command::MoveUp);
        list.insert(KeyCombo::plain(KeyCode::Down), Command::MoveDown);
        list.insert(KeyCombo::plain(KeyCode::Char('j')), Command::MoveDown);
        list.insert(KeyCombo::plain(KeyCode::Enter), Command::OpenSelected);
        self.screen.insert(Screen::CoinList, list);

        let mut detail = HashMap::new();
        detail.insert(
            KeyCombo::plain(KeyCode::Char('p')),
            Command::ShowTab(CoinTab::Price),
        );
        detail.insert(
            KeyCombo::plain(KeyCode::Char('c')),
            Command::ShowTab(CoinTab::Chart),
        );
        self.screen.insert(Screen::CoinDetail, detail);
    }

    pub fn get_global(&self, combo: &KeyCombo) -> Option<&Command> {
        self.global.get(combo)
    }

    pub fn get_screen(&self, screen: Screen, combo: &KeyCombo) -> Option<&Command> {
        self.screen.get(&screen).and_then(|m| m.get(combo))
    }
}
