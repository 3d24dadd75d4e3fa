use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Aggregate figures for the whole cryptocurrency market.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GlobalMarket {
    #[serde(rename = "active_cryptocurrencies", default)]
    pub active_currencies: u64,
    #[serde(default)]
    pub active_markets: u64,
    #[serde(default)]
    pub bitcoin_percentage_of_market_cap: f64,
    #[serde(default)]
    pub quotes: HashMap<String, GlobalMarketQuote>,
    #[serde(default)]
    pub last_updated: Option<i64>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GlobalMarketQuote {
    #[serde(default)]
    pub total_market_cap: f64,
    #[serde(default)]
    pub total_volume_24h: f64,
}
