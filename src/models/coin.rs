//! Coin metadata returned by the `/coins` endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One entry of the `GET /coins` listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CoinSummary {
    pub id: String,
    pub name: String,
    pub symbol: String,
    pub rank: u32,
    #[serde(default)]
    pub is_new: bool,
    #[serde(default)]
    pub is_active: bool,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
}

/// Full coin metadata from `GET /coins/{id}`.
///
/// Fetched once per coin identifier and never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CoinInfo {
    pub id: String,
    pub name: String,
    pub symbol: String,
    pub rank: u32,
    #[serde(default)]
    pub is_new: bool,
    #[serde(default)]
    pub is_active: bool,
    /// Upstream field `type` ("coin" or "token")
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub open_source: bool,
    #[serde(default)]
    pub hardware_wallet: bool,
    #[serde(default)]
    pub development_status: Option<String>,
    #[serde(default)]
    pub proof_type: Option<String>,
    #[serde(default)]
    pub org_structure: Option<String>,
    #[serde(default)]
    pub hash_algorithm: Option<String>,
    #[serde(default)]
    pub started_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub first_data_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub last_data_at: Option<DateTime<Utc>>,
}

impl CoinInfo {
    /// Description text, empty when the API sent none.
    pub fn description_text(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }
}

/// Keep active, ranked coins ordered by rank and cut the list to `limit`.
pub fn top_ranked(mut coins: Vec<CoinSummary>, limit: usize) -> Vec<CoinSummary> {
    coins.retain(|c| c.is_active && c.rank > 0);
    coins.sort_by_key(|c| c.rank);
    coins.truncate(limit);
    coins
}
