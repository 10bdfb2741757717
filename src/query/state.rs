//! Per-query state: loading, success or error, plus the last good snapshot.

use chrono::{DateTime, Utc};

use crate::error::{FetchResult, NetworkError};

/// Coarse status used by the views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryStatus {
    /// No data and no error yet
    Loading,
    /// Data is present (possibly with a newer refresh error)
    Success,
    /// No data, last attempt failed
    Error,
}

/// Result cache for one query.
///
/// Data survives a failed refresh: once a snapshot is present it is only
/// replaced by a newer snapshot, never cleared by an error.
#[derive(Debug, Clone)]
pub struct Query<T> {
    data: Option<T>,
    error: Option<NetworkError>,
    updated_at: Option<DateTime<Utc>>,
    fetch_count: u32,
}

impl<T> Default for Query<T> {
    fn default() -> Self {
        Self {
            data: None,
            error: None,
            updated_at: None,
            fetch_count: 0,
        }
    }
}

impl<T> Query<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> QueryStatus {
        if self.data.is_some() {
            QueryStatus::Success
        } else if self.error.is_some() {
            QueryStatus::Error
        } else {
            QueryStatus::Loading
        }
    }

    pub fn is_loading(&self) -> bool {
        self.status() == QueryStatus::Loading
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    /// Error from the most recent attempt, cleared by the next success.
    pub fn error(&self) -> Option<&NetworkError> {
        self.error.as_ref()
    }

    /// When the current snapshot arrived.
    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }

    /// Number of settled fetches (success or failure).
    pub fn fetch_count(&self) -> u32 {
        self.fetch_count
    }

    /// Apply a settled fetch.
    pub fn resolve(&mut self, result: FetchResult<T>) {
        self.fetch_count += 1;
        match result {
            Ok(data) => {
                self.data = Some(data);
                self.error = None;
                self.updated_at = Some(Utc::now());
            }
            Err(e) => {
                self.error = Some(e);
            }
        }
    }
}
