//! Market data models
//!
//! - `listing` - Identity records (Listing)
//! - `ticker` - Ticker snapshots and per-currency quotes
//! - `global` - Global market summary
//! - `graph` - Chart series, passed through as delivered
//! - `market` / `exchange` - Rows scraped from the website tables
//! - `options` - Request options for each operation

mod envelope;
mod exchange;
mod global;
mod graph;
mod listing;
mod market;
mod options;
mod ticker;

pub(crate) use envelope::Envelope;
pub use exchange::Exchange;
pub use global::{GlobalMarket, GlobalMarketQuote};
pub use graph::{GraphPoint, MarketGraph, TickerGraph};
pub use listing::Listing;
pub use market::Market;
pub use options::{
    GlobalMarketOptions, MarketGraphOptions, MarketsOptions, PriceOptions, TickerGraphOptions,
    TickerOptions, TickerSort, TickersOptions,
};
pub use ticker::{Ticker, TickerQuote};
