//! CoinMarketCap client
//!
//! Fetches cryptocurrency market data from the CoinMarketCap JSON API and,
//! where no endpoint exists, scrapes the website's HTML tables. Loosely
//! typed upstream data is normalised into typed records.
//!
//! # Overview
//!
//! ```text
//! +------------------+     +------------------+
//! |  CoinMarketCap   | --> |    Transport     |  (GET url -> body)
//! +------------------+     +------------------+
//!          |
//!          +-- api ------> JSON envelopes  --> Listing, Ticker, GlobalMarket, graphs
//!          |
//!          +-- pages ----> scrape tables   --> Market, Exchange
//!          |
//!          +-- resolve --> symbol -> id / slug, price
//! ```
//!
//! # Core Types
//!
//! - [`CoinMarketCap`] - The client, generic over its [`Transport`]
//! - [`CoinMarketData`] - Object-safe trait over every operation
//! - [`ClientConfig`] - Base URLs, timeout and pagination cap
//! - [`MarketDataError`] - Error taxonomy shared by all operations
//!
//! Scraped numbers go through [`parse`], which degrades malformed cells to
//! zero instead of failing.

pub mod client;
pub mod config;
pub mod errors;
pub mod models;
pub mod parse;
pub mod scrape;
pub mod transport;

pub use client::{CoinMarketCap, CoinMarketData};
pub use config::ClientConfig;
pub use errors::{MarketDataError, Result, RetryClass};
pub use models::{
    Exchange, GlobalMarket, GlobalMarketOptions, GlobalMarketQuote, GraphPoint, Listing, Market,
    MarketGraph, MarketGraphOptions, MarketsOptions, PriceOptions, Ticker, TickerGraph,
    TickerGraphOptions, TickerOptions, TickerQuote, TickerSort, TickersOptions,
};
pub use transport::{HttpTransport, Transport};
