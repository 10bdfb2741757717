//! File-based logging initialization.
//!
//! The TUI owns the terminal, so logs only ever go to a file:
//! `<log dir>/coinlens.log.<date>`, rotated daily, written off-thread.

use std::fs;
use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::error::{AppError, AppResult};

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "coinlens=info,warn";
pub const LOG_FILE_PREFIX: &str = "coinlens.log";

/// Install the global subscriber writing to `log_dir`.
///
/// Keep the returned guard alive until exit; dropping it flushes and stops
/// the writer thread.
pub fn init(log_dir: &Path) -> AppResult<WorkerGuard> {
    fs::create_dir_all(log_dir).map_err(|e| AppError::Logging {
        message: format!("cannot create {}: {}", log_dir.display(), e),
    })?;

    let file_appender = tracing_appender::rolling::daily(log_dir, LOG_FILE_PREFIX);
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer()
        .with_writer(writer)
        .with_target(true)
        .with_thread_ids(true)
        .with_line_number(true)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter())
        .with(file_layer)
        .try_init()
        .map_err(|e| AppError::Logging {
            message: e.to_string(),
        })?;

    tracing::info!(
        log_dir = %log_dir.display(),
        version = env!("CARGO_PKG_VERSION"),
        "Logging initialized"
    );
    Ok(guard)
}

/// `RUST_LOG` if it parses, else [`DEFAULT_FILTER`].
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_parses() {
        assert!(EnvFilter::try_new(DEFAULT_FILTER).is_ok());
    }

    #[test]
    fn test_init_fails_on_file_path() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("not-a-dir");
        fs::write(&file, b"x").unwrap();

        let err = init(&file.join("logs")).unwrap_err();
        assert!(matches!(err, AppError::Logging { .. }));
    }
}
