//! Window title sink.
//!
//! The coin detail view publishes a title string; where it ends up (terminal
//! window title, a test recorder) is decided by the implementation.

/// Receives window title updates.
pub trait TitleSink: Send {
    /// Replace the current title.
    fn set_title(&mut self, title: &str);
}
