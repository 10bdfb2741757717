//! Input handling: key events become [`Command`]s.
//!
//! ```text
//! KeyEvent -> CommandRegistry::dispatch(key, screen) -> Command -> App::handle_command
//! ```
//!
//! - [`command`]: the [`Command`] enum
//! - [`context`]: [`Screen`] derived from the current route
//! - [`keybindings`]: default key tables
//! - [`registry`]: [`CommandRegistry`] lookup

pub mod command;
pub mod context;
pub mod keybindings;
pub mod registry;

pub use command::Command;
pub use context::Screen;
pub use keybindings::{KeyCombo, KeybindingConfig};
pub use registry::CommandRegistry;
