//! Runtime configuration.
//!
//! Defaults, overridden by `COINLENS_*` environment variables, overridden by
//! command-line flags.
//!
//! ```ignore
//! use coinlens::config::AppConfig;
//!
//! let config = AppConfig::from_env()?
//!     .with_light_theme(true)
//!     .with_start_path("/eth-ethereum");
//! config.validate()?;
//! ```

use std::path::PathBuf;
use std::time::Duration;

use crate::api::DEFAULT_API_URL;
use crate::error::{AppError, AppResult};

pub const ENV_API_URL: &str = "COINLENS_API_URL";
pub const ENV_REFRESH_MS: &str = "COINLENS_REFRESH_MS";
pub const ENV_LOG_DIR: &str = "COINLENS_LOG_DIR";
pub const ENV_LIGHT: &str = "COINLENS_LIGHT";

/// Default ticker refresh period.
pub const DEFAULT_REFRESH: Duration = Duration::from_millis(5000);
pub const DEFAULT_APP_TITLE: &str = "Coin Tracker";
pub const DEFAULT_LIST_LIMIT: usize = 100;
pub const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(10);

/// Application configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Base URL of the coin API, without trailing slash
    pub api_url: String,
    /// Ticker refresh period while a coin is shown
    pub refresh_interval: Duration,
    /// Prefix of every window title
    pub app_title: String,
    /// Start in the light theme
    pub light_theme: bool,
    /// Number of coins kept in the list
    pub list_limit: usize,
    /// Per-request HTTP timeout
    pub http_timeout: Duration,
    /// Directory for log files; `None` uses the platform data dir
    pub log_dir: Option<PathBuf>,
    /// Path opened at startup
    pub start_path: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            refresh_interval: DEFAULT_REFRESH,
            app_title: DEFAULT_APP_TITLE.to_string(),
            light_theme: false,
            list_limit: DEFAULT_LIST_LIMIT,
            http_timeout: DEFAULT_HTTP_TIMEOUT,
            log_dir: None,
            start_path: "/".to_string(),
        }
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_refresh_interval(mut self, interval: Duration) -> Self {
        self.refresh_interval = interval;
        self
    }

    pub fn with_app_title(mut self, title: impl Into<String>) -> Self {
        self.app_title = title.into();
        self
    }

    pub fn with_light_theme(mut self, light: bool) -> Self {
        self.light_theme = light;
        self
    }

    pub fn with_list_limit(mut self, limit: usize) -> Self {
        self.list_limit = limit;
        self
    }

    pub fn with_http_timeout(mut self, timeout: Duration) -> Self {
        self.http_timeout = timeout;
        self
    }

    pub fn with_log_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.log_dir = Some(dir.into());
        self
    }

    /// Open `/{coin_id}` (or any path) on startup.
    pub fn with_start_path(mut self, path: impl Into<String>) -> Self {
        self.start_path = path.into();
        self
    }

    /// Defaults overridden by the `COINLENS_*` environment variables.
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`Self::from_env`] with a custom variable source.
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup(ENV_API_URL).filter(|v| !v.trim().is_empty()) {
            config = config.with_api_url(url.trim());
        }
        if let Some(ms) = lookup(ENV_REFRESH_MS) {
            let ms: u64 = ms.trim().parse().map_err(|_| {
                AppError::config(format!("{} must be a number of milliseconds, got {:?}", ENV_REFRESH_MS, ms))
            })?;
            config = config.with_refresh_interval(Duration::from_millis(ms));
        }
        if let Some(dir) = lookup(ENV_LOG_DIR).filter(|v| !v.trim().is_empty()) {
            config = config.with_log_dir(dir);
        }
        if let Some(light) = lookup(ENV_LIGHT) {
            config = config.with_light_theme(is_truthy(&light));
        }

        Ok(config)
    }

    /// Reject settings the app cannot run with.
    pub fn validate(&self) -> AppResult<()> {
        if !(self.api_url.starts_with("http://") || self.api_url.starts_with("https://")) {
            return Err(AppError::config(format!(
                "API URL must start with http:// or https://, got {:?}",
                self.api_url
            )));
        }
        if self.refresh_interval.is_zero() {
            return Err(AppError::config("refresh interval must be greater than zero"));
        }
        if self.http_timeout.is_zero() {
            return Err(AppError::config("HTTP timeout must be greater than zero"));
        }
        if self.list_limit == 0 {
            return Err(AppError::config("list limit must be greater than zero"));
        }
        Ok(())
    }

    /// Log directory, falling back to `<data dir>/coinlens/logs`.
    pub fn resolved_log_dir(&self) -> PathBuf {
        self.log_dir.clone().unwrap_or_else(|| {
            dirs::data_local_dir()
                .unwrap_or_else(std::env::temp_dir)
                .join("coinlens")
                .join("logs")
        })
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
