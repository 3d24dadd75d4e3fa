use super::{normalize_currency, normalize_symbol, CoinMarketCap};
use crate::errors::{MarketDataError, Result};
use crate::models::{PriceOptions, TickerOptions};
use crate::transport::Transport;

/// Quote currency used by `price` when none is requested.
const DEFAULT_CONVERT: &str = "USD";

impl<T: Transport> CoinMarketCap<T> {
    /// Numeric id of a coin, looked up in the full listing set.
    ///
    /// The symbol is trimmed and uppercased. When several listings share a
    /// symbol, the first one wins.
    pub async fn coin_id(&self, symbol: &str) -> Result<u64> {
        let symbol = require_symbol(symbol)?;
        let listings = self.listings().await?;

        listings
            .iter()
            .find(|listing| listing.symbol == symbol)
            .map(|listing| listing.id)
            .ok_or_else(|| MarketDataError::NotFound(format!("coin {}", symbol)))
    }

    /// Website slug of a coin, taken from its ticker detail.
    pub async fn coin_slug(&self, symbol: &str) -> Result<String> {
        let symbol = require_symbol(symbol)?;
        let ticker = self.ticker(&TickerOptions::new(symbol.as_str())).await?;

        if ticker.slug.is_empty() {
            return Err(MarketDataError::NotFound(format!("slug for {}", symbol)));
        }
        Ok(ticker.slug)
    }

    /// Price of a coin in the requested currency (USD by default).
    pub async fn price(&self, options: &PriceOptions) -> Result<f64> {
        let convert = normalize_currency(options.convert.as_deref())
            .unwrap_or_else(|| DEFAULT_CONVERT.to_string());

        let ticker = self
            .ticker(&TickerOptions::new(options.symbol.as_str()).convert(convert.as_str()))
            .await?;

        ticker.quote(&convert).map(|quote| quote.price).ok_or_else(|| {
            MarketDataError::NotFound(format!(
                "{} quote for {}",
                convert,
                normalize_symbol(&options.symbol)
            ))
        })
    }
}

fn require_symbol(symbol: &str) -> Result<String> {
    let symbol = normalize_symbol(symbol);
    if symbol.is_empty() {
        return Err(MarketDataError::InvalidArgument("empty symbol".to_string()));
    }
    Ok(symbol)
}
