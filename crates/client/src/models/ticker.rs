use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Snapshot of a single cryptocurrency's market metrics.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Ticker {
    pub id: u64,
    #[serde(default)]
    pub name: String,
    pub symbol: String,
    #[serde(rename = "website_slug", default)]
    pub slug: String,
    /// 1-based competitive ranking
    #[serde(default)]
    pub rank: u32,
    #[serde(default)]
    pub circulating_supply: Option<f64>,
    #[serde(default)]
    pub total_supply: Option<f64>,
    #[serde(default)]
    pub max_supply: Option<f64>,
    /// Quotes keyed by currency code ("USD", "BTC", ...)
    #[serde(default)]
    pub quotes: HashMap<String, TickerQuote>,
    /// Unix timestamp (seconds)
    #[serde(default)]
    pub last_updated: Option<i64>,
}

impl Ticker {
    /// Quote for a currency code, matched case-insensitively.
    pub fn quote(&self, currency: &str) -> Option<&TickerQuote> {
        let currency = currency.trim();
        self.quotes.get(currency).or_else(|| {
            self.quotes
                .iter()
                .find(|(code, _)| code.eq_ignore_ascii_case(currency))
                .map(|(_, quote)| quote)
        })
    }
}

/// A currency-denominated view of a ticker's figures.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TickerQuote {
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub volume_24h: Option<f64>,
    #[serde(default)]
    pub market_cap: Option<f64>,
    #[serde(default)]
    pub percent_change_1h: Option<f64>,
    #[serde(default)]
    pub percent_change_24h: Option<f64>,
    #[serde(default)]
    pub percent_change_7d: Option<f64>,
}
