//! Application-level state shared across views.

pub mod theme;

pub use theme::ThemeState;
