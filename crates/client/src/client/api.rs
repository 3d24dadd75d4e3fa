use std::collections::HashMap;

use tracing::debug;

use super::{normalize_currency, normalize_symbol, with_query, CoinMarketCap};
use crate::errors::{MarketDataError, Result};
use crate::models::{
    GlobalMarket, GlobalMarketOptions, Listing, MarketGraph, MarketGraphOptions, Ticker,
    TickerGraph, TickerGraphOptions, TickerOptions, TickersOptions,
};
use crate::transport::Transport;

const GLOBAL_MARKET_GRAPH_PATH: &str = "global/marketcap-total";
const ALTCOIN_MARKET_GRAPH_PATH: &str = "global/marketcap-altcoin";

impl<T: Transport> CoinMarketCap<T> {
    /// All coin listings.
    pub async fn listings(&self) -> Result<Vec<Listing>> {
        let url = format!("{}/listings", self.config.api_base_url);
        let listings: Option<Vec<Listing>> =
            self.get_enveloped(&url, "listings response").await?;
        Ok(listings.unwrap_or_default())
    }

    /// Ticker snapshots sorted by ascending rank. Equal ranks are ordered by id.
    pub async fn tickers(&self, options: &TickersOptions) -> Result<Vec<Ticker>> {
        let mut params = Vec::new();
        if let Some(start) = options.start {
            params.push(("start", start.to_string()));
        }
        if let Some(limit) = options.limit {
            params.push(("limit", limit.to_string()));
        }
        if let Some(convert) = normalize_currency(options.convert.as_deref()) {
            params.push(("convert", convert));
        }
        if let Some(sort) = options.sort {
            params.push(("sort", sort.as_str().to_string()));
        }
        let url = with_query(format!("{}/ticker", self.config.api_base_url), &params);

        let data: Option<HashMap<String, Ticker>> =
            self.get_enveloped(&url, "tickers response").await?;

        let mut tickers: Vec<Ticker> = data.unwrap_or_default().into_values().collect();
        sort_by_rank(&mut tickers);

        debug!("Fetched {} tickers", tickers.len());
        Ok(tickers)
    }

    /// Ticker detail for a symbol. Resolves the symbol to an id first.
    pub async fn ticker(&self, options: &TickerOptions) -> Result<Ticker> {
        let id = self.coin_id(&options.symbol).await?;

        let params: Vec<(&str, String)> = normalize_currency(options.convert.as_deref())
            .map(|convert| vec![("convert", convert)])
            .unwrap_or_default();
        let url = with_query(
            format!("{}/ticker/{}", self.config.api_base_url, id),
            &params,
        );

        self.get_enveloped::<Ticker>(&url, "ticker response")
            .await?
            .ok_or_else(|| {
                MarketDataError::NotFound(format!(
                    "ticker for {}",
                    normalize_symbol(&options.symbol)
                ))
            })
    }

    /// Chart series for a coin between two Unix timestamps (seconds).
    pub async fn ticker_graph(&self, options: &TickerGraphOptions) -> Result<TickerGraph> {
        check_range(options.start, options.end)?;
        let slug = self.coin_slug(&options.symbol).await?;
        let url = graph_url(
            &self.config.graph_base_url,
            &format!("currencies/{}", slug),
            options.start,
            options.end,
        );
        self.get_json(&url, "ticker graph response").await
    }

    /// Global market summary.
    pub async fn global_market(&self, options: &GlobalMarketOptions) -> Result<GlobalMarket> {
        let params: Vec<(&str, String)> = normalize_currency(options.convert.as_deref())
            .map(|convert| vec![("convert", convert)])
            .unwrap_or_default();
        let url = with_query(format!("{}/global", self.config.api_base_url), &params);

        self.get_enveloped::<GlobalMarket>(&url, "global market response")
            .await?
            .ok_or_else(|| MarketDataError::decode("global market response", "missing data"))
    }

    /// Total market capitalisation series.
    pub async fn global_market_graph(&self, options: &MarketGraphOptions) -> Result<MarketGraph> {
        self.market_graph(GLOBAL_MARKET_GRAPH_PATH, options).await
    }

    /// Altcoin market capitalisation series.
    pub async fn altcoin_market_graph(
        &self,
        options: &MarketGraphOptions,
    ) -> Result<MarketGraph> {
        self.market_graph(ALTCOIN_MARKET_GRAPH_PATH, options).await
    }

    async fn market_graph(&self, path: &str, options: &MarketGraphOptions) -> Result<MarketGraph> {
        check_range(options.start, options.end)?;
        let url = graph_url(&self.config.graph_base_url, path, options.start, options.end);
        self.get_json(&url, "market graph response").await
    }
}

fn sort_by_rank(tickers: &mut [Ticker]) {
    tickers.sort_by(|a, b| a.rank.cmp(&b.rank).then(a.id.cmp(&b.id)));
}

fn check_range(start: i64, end: i64) -> Result<()> {
    if end < start {
        return Err(MarketDataError::InvalidArgument(format!(
            "graph range ends ({}) before it starts ({})",
            end, start
        )));
    }
    Ok(())
}

/// The graph service takes millisecond timestamps.
fn graph_url(base: &str, path: &str, start: i64, end: i64) -> String {
    format!(
        "{}/{}/{}/{}",
        base,
        path,
        start.saturating_mul(1000),
        end.saturating_mul(1000)
    )
}
