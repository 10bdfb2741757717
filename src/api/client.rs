//! Coin API client.
//!
//! Thin typed layer over an injected [`HttpClient`]: builds endpoint URLs,
//! maps statuses and decode failures into [`NetworkError`].

use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Instant;

use crate::error::{FetchResult, NetworkError};
use crate::models::{CoinInfo, CoinSummary, CoinTickers};
use crate::traits::{Headers, HttpClient};

/// Default upstream API.
pub const DEFAULT_API_URL: &str = "https://api.coinpaprika.com/v1";

/// Client for the coin info and tickers endpoints.
///
/// Cheap to clone; every spawned fetch task gets its own clone.
#[derive(Clone)]
pub struct CoinApi {
    base_url: String,
    http: Arc<dyn HttpClient>,
}

impl CoinApi {
    /// Create a client against `base_url` (without trailing slash).
    pub fn new(base_url: impl Into<String>, http: Arc<dyn HttpClient>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, http }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET {base}/coins`
    pub fn coins_url(&self) -> String {
        format!("{}/coins", self.base_url)
    }

    /// `GET {base}/coins/{id}`
    pub fn coin_info_url(&self, coin_id: &str) -> String {
        format!("{}/coins/{}", self.base_url, urlencoding::encode(coin_id))
    }

    /// `GET {base}/tickers/{id}`
    pub fn coin_tickers_url(&self, coin_id: &str) -> String {
        format!("{}/tickers/{}", self.base_url, urlencoding::encode(coin_id))
    }

    /// Fetch the full coin listing.
    #[tracing::instrument(skip(self))]
    pub async fn fetch_coins(&self) -> FetchResult<Vec<CoinSummary>> {
        self.get_json(&self.coins_url()).await
    }

    /// Fetch metadata for one coin.
    #[tracing::instrument(skip(self))]
    pub async fn fetch_coin_info(&self, coin_id: &str) -> FetchResult<CoinInfo> {
        self.get_json(&self.coin_info_url(coin_id)).await
    }

    /// Fetch the current ticker snapshot for one coin.
    #[tracing::instrument(skip(self))]
    pub async fn fetch_coin_tickers(&self, coin_id: &str) -> FetchResult<CoinTickers> {
        self.get_json(&self.coin_tickers_url(coin_id)).await
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> FetchResult<T> {
        let start = Instant::now();
        let mut headers = Headers::new();
        headers.insert("Accept".to_string(), "application/json".to_string());

        let response = self.http.get(url, &headers).await.map_err(|e| {
            tracing::warn!(url, error = %e, "Coin API request failed");
            NetworkError::from_http(e, url)
        })?;

        if !response.is_success() {
            let body = response.text();
            tracing::warn!(
                url,
                status = response.status,
                duration_ms = start.elapsed().as_millis() as u64,
                "Coin API returned error status"
            );
            return Err(NetworkError::from_status(response.status, &body));
        }

        let value = response.json::<T>().map_err(|e| {
            tracing::warn!(url, error = %e, "Coin API response parse error");
            NetworkError::from(e)
        })?;

        tracing::debug!(
            url,
            duration_ms = start.elapsed().as_millis() as u64,
            "Coin API request succeeded"
        );
        Ok(value)
    }
}

impl std::fmt::Debug for CoinApi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CoinApi")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}
