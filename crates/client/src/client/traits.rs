use async_trait::async_trait;

use super::CoinMarketCap;
use crate::errors::Result;
use crate::models::{
    Exchange, GlobalMarket, GlobalMarketOptions, Listing, Market, MarketGraph, MarketGraphOptions,
    MarketsOptions, PriceOptions, Ticker, TickerGraph, TickerGraphOptions, TickerOptions,
    TickersOptions,
};
use crate::transport::Transport;

/// Object-safe view of every client operation.
///
/// Code that consumes market data can depend on `Arc<dyn CoinMarketData>`
/// and swap the real client for a stub.
#[async_trait]
pub trait CoinMarketData: Send + Sync {
    async fn listings(&self) -> Result<Vec<Listing>>;

    async fn tickers(&self, options: &TickersOptions) -> Result<Vec<Ticker>>;

    async fn ticker(&self, options: &TickerOptions) -> Result<Ticker>;

    async fn ticker_graph(&self, options: &TickerGraphOptions) -> Result<TickerGraph>;

    async fn global_market(&self, options: &GlobalMarketOptions) -> Result<GlobalMarket>;

    async fn global_market_graph(&self, options: &MarketGraphOptions) -> Result<MarketGraph>;

    async fn altcoin_market_graph(&self, options: &MarketGraphOptions) -> Result<MarketGraph>;

    async fn markets(&self, options: &MarketsOptions) -> Result<Vec<Market>>;

    async fn exchanges(&self) -> Result<Vec<Exchange>>;

    async fn exchanges_by_page(&self, page: u32) -> Result<Vec<Exchange>>;

    async fn price(&self, options: &PriceOptions) -> Result<f64>;

    async fn coin_id(&self, symbol: &str) -> Result<u64>;

    async fn coin_slug(&self, symbol: &str) -> Result<String>;
}

#[async_trait]
impl<T: Transport> CoinMarketData for CoinMarketCap<T> {
    async fn listings(&self) -> Result<Vec<Listing>> {
        CoinMarketCap::listings(self).await
    }

    async fn tickers(&self, options: &TickersOptions) -> Result<Vec<Ticker>> {
        CoinMarketCap::tickers(self, options).await
    }

    async fn ticker(&self, options: &TickerOptions) -> Result<Ticker> {
        CoinMarketCap::ticker(self, options).await
    }

    async fn ticker_graph(&self, options: &TickerGraphOptions) -> Result<TickerGraph> {
        CoinMarketCap::ticker_graph(self, options).await
    }

    async fn global_market(&self, options: &GlobalMarketOptions) -> Result<GlobalMarket> {
        CoinMarketCap::global_market(self, options).await
    }

    async fn global_market_graph(&self, options: &MarketGraphOptions) -> Result<MarketGraph> {
        CoinMarketCap::global_market_graph(self, options).await
    }

    async fn altcoin_market_graph(&self, options: &MarketGraphOptions) -> Result<MarketGraph> {
        CoinMarketCap::altcoin_market_graph(self, options).await
    }

    async fn markets(&self, options: &MarketsOptions) -> Result<Vec<Market>> {
        CoinMarketCap::markets(self, options).await
    }

    async fn exchanges(&self) -> Result<Vec<Exchange>> {
        CoinMarketCap::exchanges(self).await
    }

    async fn exchanges_by_page(&self, page: u32) -> Result<Vec<Exchange>> {
        CoinMarketCap::exchanges_by_page(self, page).await
    }

    async fn price(&self, options: &PriceOptions) -> Result<f64> {
        CoinMarketCap::price(self, options).await
    }

    async fn coin_id(&self, symbol: &str) -> Result<u64> {
        CoinMarketCap::coin_id(self, symbol).await
    }

    async fn coin_slug(&self, symbol: &str) -> Result<String> {
        CoinMarketCap::coin_slug(self, symbol).await
    }
}
