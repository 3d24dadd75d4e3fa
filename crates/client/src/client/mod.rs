//! The CoinMarketCap client.
//!
//! Operations are split by concern:
//! - `api` - JSON endpoints (listings, tickers, global market, graphs)
//! - `pages` - scraped website tables (markets, exchange rankings)
//! - `resolve` - symbol to id/slug resolution and the price shortcut
//!
//! Every operation issues its requests one after another and returns as
//! soon as any of them fails. Nothing is cached between calls.

mod api;
mod pages;
mod resolve;
mod traits;

pub use traits::CoinMarketData;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::ClientConfig;
use crate::errors::{MarketDataError, Result};
use crate::models::Envelope;
use crate::transport::{HttpTransport, Transport};

/// Client for the CoinMarketCap API and website.
///
/// # Example
///
/// ```ignore
/// use coinmarketcap_client::{CoinMarketCap, PriceOptions};
///
/// let cmc = CoinMarketCap::new();
/// let price = cmc.price(&PriceOptions::new("eth", "EUR")).await?;
/// ```
#[derive(Clone, Debug)]
pub struct CoinMarketCap<T: Transport = HttpTransport> {
    config: ClientConfig,
    transport: T,
}

impl CoinMarketCap<HttpTransport> {
    /// Client against the production endpoints.
    pub fn new() -> Self {
        Self::with_config(ClientConfig::default())
    }

    pub fn with_config(config: ClientConfig) -> Self {
        let transport = HttpTransport::new(&config);
        Self { config, transport }
    }
}

impl Default for CoinMarketCap<HttpTransport> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Transport> CoinMarketCap<T> {
    /// Client using a custom transport, e.g. a test double.
    pub fn with_transport(config: ClientConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    async fn get_json<D: DeserializeOwned>(&self, url: &str, context: &str) -> Result<D> {
        let body = self.transport.get(url).await?;
        serde_json::from_str(&body).map_err(|e| MarketDataError::decode(context, e))
    }

    /// Fetches an enveloped API response, surfacing an embedded error message
    /// before looking at the data.
    async fn get_enveloped<D: DeserializeOwned>(
        &self,
        url: &str,
        context: &str,
    ) -> Result<Option<D>> {
        let envelope: Envelope<Value> = self.get_json(url, context).await?;
        if let Some(message) = envelope.metadata.error_message() {
            return Err(MarketDataError::Upstream(message.to_string()));
        }
        match envelope.data {
            None | Some(Value::Null) => Ok(None),
            Some(data) => serde_json::from_value(data)
                .map(Some)
                .map_err(|e| MarketDataError::decode(context, e)),
        }
    }
}

/// Appends `key=value` pairs, URL-encoding the values. No `?` when empty.
fn with_query(base: String, params: &[(&str, String)]) -> String {
    if params.is_empty() {
        return base;
    }
    let query = params
        .iter()
        .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&");
    format!("{}?{}", base, query)
}

/// Trimmed, uppercased symbol.
pub(crate) fn normalize_symbol(symbol: &str) -> String {
    symbol.trim().to_uppercase()
}

/// Trimmed, uppercased currency code; `None` when blank.
fn normalize_currency(currency: Option<&str>) -> Option<String> {
    currency
        .map(|c| c.trim().to_uppercase())
        .filter(|c| !c.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_query_omits_question_mark_when_empty() {
        assert_eq!(
            with_query("https://api.coinmarketcap.com/v2/global".to_string(), &[]),
            "https://api.coinmarketcap.com/v2/global"
        );
    }

    #[test]
    fn test_with_query_encodes_values() {
        let url = with_query(
            "http://localhost/ticker".to_string(),
            &[("start", "1".to_string()), ("convert", "A B&C".to_string())],
        );
        assert_eq!(url, "http://localhost/ticker?start=1&convert=A%20B%26C");
    }

    #[test]
    fn test_normalize_symbol() {
        assert_eq!(normalize_symbol("  btc "), "BTC");
        assert_eq!(normalize_symbol("Eth"), "ETH");
    }

    #[test]
    fn test_normalize_currency() {
        assert_eq!(normalize_currency(Some(" eur ")), Some("EUR".to_string()));
        assert_eq!(normalize_currency(Some("   ")), None);
        assert_eq!(normalize_currency(None), None);
    }
}
