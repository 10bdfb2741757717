//! Title sink that records every title it receives.

use std::sync::{Arc, Mutex};

use crate::traits::TitleSink;

/// Recording [`TitleSink`]. Clones share the same history.
#[derive(Debug, Clone, Default)]
pub struct RecordingTitle {
    titles: Arc<Mutex<Vec<String>>>,
}

impl RecordingTitle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every title set so far, oldest first.
    pub fn history(&self) -> Vec<String> {
        self.titles.lock().unwrap().clone()
    }

    /// The most recent title, if any.
    pub fn last(&self) -> Option<String> {
        self.titles.lock().unwrap().last().cloned()
    }
}

impl TitleSink for RecordingTitle {
    fn set_title(&mut self, title: &str) {
        self.titles.lock().unwrap().push(title.to_string());
    }
}
