//! Price ticker snapshots returned by `GET /tickers/{id}`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Market snapshot for a single coin.
///
/// Replaced wholesale on every refresh; never patched field by field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CoinTickers {
    pub id: String,
    pub name: String,
    pub symbol: String,
    pub rank: u32,
    #[serde(default)]
    pub circulating_supply: f64,
    #[serde(default)]
    pub total_supply: f64,
    #[serde(default)]
    pub max_supply: f64,
    #[serde(default)]
    pub beta_value: Option<f64>,
    #[serde(default)]
    pub first_data_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub last_updated: Option<DateTime<Utc>>,
    pub quotes: Quotes,
}

/// Quote table keyed by currency. Only USD is requested.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Quotes {
    #[serde(rename = "USD")]
    pub usd: UsdQuote,
}

/// USD market figures. This is the record handed to the price and chart tabs.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct UsdQuote {
    pub price: f64,
    pub volume_24h: f64,
    pub volume_24h_change_24h: f64,
    pub market_cap: f64,
    pub market_cap_change_24h: f64,
    pub percent_change_15m: f64,
    pub percent_change_30m: f64,
    pub percent_change_1h: f64,
    pub percent_change_6h: f64,
    pub percent_change_12h: f64,
    pub percent_change_24h: f64,
    pub percent_change_7d: f64,
    pub percent_change_30d: f64,
    pub percent_change_1y: f64,
    pub ath_price: Option<f64>,
    pub ath_date: Option<DateTime<Utc>>,
    pub percent_from_price_ath: Option<f64>,
}

impl UsdQuote {
    /// Percent changes from the shortest window to the longest, with labels.
    pub fn change_windows(&self) -> [(&'static str, f64); 9] {
        [
            ("15m", self.percent_change_15m),
            ("30m", self.percent_change_30m),
            ("1h", self.percent_change_1h),
            ("6h", self.percent_change_6h),
            ("12h", self.percent_change_12h),
            ("24h", self.percent_change_24h),
            ("7d", self.percent_change_7d),
            ("30d", self.percent_change_30d),
            ("1y", self.percent_change_1y),
        ]
    }
}

impl CoinTickers {
    /// The USD quote record.
    pub fn usd(&self) -> &UsdQuote {
        &self.quotes.usd
    }
}
