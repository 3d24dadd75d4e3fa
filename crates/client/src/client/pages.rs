use tracing::{debug, warn};

use super::CoinMarketCap;
use crate::errors::{MarketDataError, Result};
use crate::models::{Exchange, Market, MarketsOptions};
use crate::scrape::{parse_exchanges_page, parse_markets_page};
use crate::transport::Transport;

impl<T: Transport> CoinMarketCap<T> {
    /// Trading venues of a coin, scraped from its website page.
    ///
    /// Uses `slug` when given, otherwise resolves `symbol` to a slug. Fails
    /// with `InvalidArgument`, without any request, when both are blank.
    pub async fn markets(&self, options: &MarketsOptions) -> Result<Vec<Market>> {
        let slug = non_blank(options.slug.as_deref());
        let symbol = non_blank(options.symbol.as_deref());

        let slug = match (slug, symbol) {
            (Some(slug), _) => slug.to_string(),
            (None, Some(symbol)) => self.coin_slug(symbol).await?,
            (None, None) => {
                return Err(MarketDataError::InvalidArgument(
                    "markets needs a symbol or a slug".to_string(),
                ))
            }
        };

        let url = format!("{}/currencies/{}/", self.config.site_base_url, slug);
        let html = self.transport.get(&url).await?;
        let markets = parse_markets_page(&html)?;

        debug!("Scraped {} markets for {}", markets.len(), slug);
        Ok(markets)
    }

    /// One page of the exchange rankings. Page 0 is treated as page 1.
    pub async fn exchanges_by_page(&self, page: u32) -> Result<Vec<Exchange>> {
        let page = page.max(1);
        let url = format!("{}/rankings/exchanges/{}", self.config.site_base_url, page);
        let html = self.transport.get(&url).await?;
        parse_exchanges_page(&html)
    }

    /// All exchange rankings, walking pages from 1 until one comes back empty.
    ///
    /// Stops after `max_exchange_pages` pages even if the last one was not
    /// empty. Any page failure aborts the walk.
    pub async fn exchanges(&self) -> Result<Vec<Exchange>> {
        let max_pages = self.config.max_exchange_pages.max(1);
        let mut exchanges = Vec::new();

        for page in 1..=max_pages {
            let page_exchanges = self
                .exchanges_by_page(page)
                .await
                .map_err(|e| MarketDataError::Exchanges(Box::new(e)))?;

            if page_exchanges.is_empty() {
                debug!("Exchange rankings end at page {}", page);
                return Ok(exchanges);
            }
            exchanges.extend(page_exchanges);
        }

        warn!(
            "Stopped exchange rankings after {} pages without reaching an empty page",
            max_pages
        );
        Ok(exchanges)
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
