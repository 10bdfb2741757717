//! Key event to command dispatch.

use crossterm::event::{KeyEvent, KeyEventKind, KeyModifiers};

use super::command::Command;
use super::context::Screen;
use super::keybindings::{KeyCombo, KeybindingConfig};

/// Resolves key events against a [`KeybindingConfig`].
#[derive(Debug, Clone, Default)]
pub struct CommandRegistry {
    config: KeybindingConfig,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: KeybindingConfig) -> Self {
        Self { config }
    }

    /// Command for `key` on `screen`, if any. Release events are ignored.
    pub fn dispatch(&self, key: KeyEvent, screen: Screen) -> Option<Command> {
        if key.kind == KeyEventKind::Release {
            return None;
        }
        // Shift only changes the character, not the binding
        let modifiers = key.modifiers - KeyModifiers::SHIFT;
        let combo = KeyCombo::new(key.code, modifiers);

        if let Some(cmd) = self.config.get_global(&combo) {
            return Some(*cmd);
        }
        self.config.get_screen(screen, &combo).copied()
    }
}
