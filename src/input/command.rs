//! Command definitions for keyboard input handling.
//!
//! Key bindings resolve to a [`Command`]; the app executes commands without
//! knowing which key produced them.

use crate::router::CoinTab;

/// Every user action the app understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    // Global
    /// Leave the app (q, Ctrl+C)
    Quit,
    /// Flip the dark/light theme (t)
    ToggleTheme,
    /// Follow the Back link to `/` (b, Esc, Backspace)
    Back,

    // Coin list
    /// Move the selection up
    MoveUp,
    /// Move the selection down
    MoveDown,
    /// Open the selected coin (Enter)
    OpenSelected,

    // Coin detail
    /// Follow a tab link (p, c)
    ShowTab(CoinTab),

    /// Key consumed, nothing to do
    Noop,
}

impl Command {
    /// Whether executing the command can change what is on screen.
    pub fn needs_redraw(&self) -> bool {
        !matches!(self, Command::Noop | Command::Quit)
    }
}
