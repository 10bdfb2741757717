//! Title sink that sets the terminal window title.

use crossterm::{execute, terminal::SetTitle};
use std::io::{self, Write};

use crate::traits::TitleSink;

/// Writes the crossterm `SetTitle` sequence to a writer (stdout by default).
pub struct TerminalTitle<W: Write + Send> {
    writer: W,
}

impl TerminalTitle<io::Stdout> {
    pub fn stdout() -> Self {
        Self {
            writer: io::stdout(),
        }
    }
}

impl<W: Write + Send> TerminalTitle<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send> TitleSink for TerminalTitle<W> {
    fn set_title(&mut self, title: &str) {
        if let Err(e) = execute!(self.writer, SetTitle(title)) {
            tracing::debug!(error = %e, "Failed to set terminal title");
        }
    }
}
