//! JSON fixtures shaped like the upstream coin API.

use serde_json::{json, Value};

pub fn bitcoin_info_json() -> Value {
    json!({
        "id": "btc-bitcoin",
        "name": "Bitcoin",
        "symbol": "BTC",
        "rank": 1,
        "is_new": false,
        "is_active": true,
        "type": "coin",
        "description": "Bitcoin is a cryptocurrency and worldwide payment system.",
        "message": "",
        "open_source": true,
        "started_at": "2009-01-03T00:00:00Z",
        "development_status": "Working product",
        "hardware_wallet": true,
        "proof_type": "Proof of Work",
        "org_structure": "Decentralized",
        "hash_algorithm": "SHA256",
        "first_data_at": "2010-07-17T00:00:00Z",
        "last_data_at": "2024-03-01T12:00:00Z"
    })
}

pub fn ethereum_info_json() -> Value {
    json!({
        "id": "eth-ethereum",
        "name": "Ethereum",
        "symbol": "ETH",
        "rank": 2,
        "is_new": false,
        "is_active": true,
        "type": "coin",
        "description": "Ethereum is a decentralized platform for smart contracts."
    })
}

fn tickers_json(id: &str, name: &str, symbol: &str, rank: u32, price: f64, total: f64, max: f64) -> Value {
    json!({
        "id": id,
        "name": name,
        "symbol": symbol,
        "rank": rank,
        "circulating_supply": total,
        "total_supply": total,
        "max_supply": max,
        "beta_value": 1.0,
        "first_data_at": "2015-08-07T00:00:00Z",
        "last_updated": "2024-03-01T12:00:00Z",
        "quotes": {
            "USD": {
                "price": price,
                "volume_24h": 25000000000.0,
                "volume_24h_change_24h": -3.2,
                "market_cap": 1200000000000.0,
                "market_cap_change_24h": 1.1,
                "percent_change_15m": 0.1,
                "percent_change_30m": 0.2,
                "percent_change_1h": -0.3,
                "percent_change_6h": 0.4,
                "percent_change_12h": 0.5,
                "percent_change_24h": 1.5,
                "percent_change_7d": -2.5,
                "percent_change_30d": 10.0,
                "percent_change_1y": 120.0,
                "ath_price": 73000.0,
                "ath_date": "2024-03-14T07:10:00Z",
                "percent_from_price_ath": -16.1
            }
        }
    })
}

pub fn bitcoin_tickers_json(price: f64) -> Value {
    tickers_json("btc-bitcoin", "Bitcoin", "BTC", 1, price, 19_500_000.0, 21_000_000.0)
}

pub fn ethereum_tickers_json(price: f64) -> Value {
    tickers_json("eth-ethereum", "Ethereum", "ETH", 2, price, 120_000_000.0, 0.0)
}

/// Listing with an inactive and an unranked coin mixed in, out of order.
pub fn coins_json() -> Value {
    json!([
        {"id": "eth-ethereum", "name": "Ethereum", "symbol": "ETH", "rank": 2, "is_new": false, "is_active": true, "type": "coin"},
        {"id": "dead-coin", "name": "Dead", "symbol": "DEAD", "rank": 3, "is_new": false, "is_active": false, "type": "coin"},
        {"id": "btc-bitcoin", "name": "Bitcoin", "symbol": "BTC", "rank": 1, "is_new": false, "is_active": true, "type": "coin"},
        {"id": "new-coin", "name": "Fresh", "symbol": "NEW", "rank": 0, "is_new": true, "is_active": true, "type": "token"},
        {"id": "usdt-tether", "name": "Tether", "symbol": "USDT", "rank": 4, "is_new": false, "is_active": true, "type": "token"}
    ])
}
