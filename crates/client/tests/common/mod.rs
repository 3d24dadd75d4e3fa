#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use coinmarketcap_client::{ClientConfig, CoinMarketCap, MarketDataError, Transport};

pub const API: &str = "http://api.test/v2";
pub const SITE: &str = "http://site.test";
pub const GRAPH: &str = "http://graph.test";

enum Reply {
    Body(String),
    Status(u16, String),
    Connection(String),
}

/// In-memory transport returning canned bodies per URL and recording every
/// requested URL in order. Unknown URLs answer HTTP 404.
#[derive(Default)]
pub struct MockTransport {
    replies: HashMap<String, Reply>,
    requests: Mutex<Vec<String>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_body(mut self, url: impl Into<String>, body: impl Into<String>) -> Self {
        self.replies.insert(url.into(), Reply::Body(body.into()));
        self
    }

    pub fn with_status(mut self, url: impl Into<String>, status: u16, body: &str) -> Self {
        self.replies
            .insert(url.into(), Reply::Status(status, body.to_string()));
        self
    }

    pub fn with_connection_error(mut self, url: impl Into<String>, message: &str) -> Self {
        self.replies
            .insert(url.into(), Reply::Connection(message.to_string()));
        self
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn get(&self, url: &str) -> Result<String, MarketDataError> {
        self.requests.lock().unwrap().push(url.to_string());
        match self.replies.get(url) {
            Some(Reply::Body(body)) => Ok(body.clone()),
            Some(Reply::Status(status, body)) => Err(MarketDataError::HttpStatus {
                url: url.to_string(),
                status: *status,
                body: body.clone(),
            }),
            Some(Reply::Connection(message)) => Err(MarketDataError::Connection {
                url: url.to_string(),
                message: message.clone(),
            }),
            None => Err(MarketDataError::HttpStatus {
                url: url.to_string(),
                status: 404,
                body: format!("no reply mocked for {}", url),
            }),
        }
    }
}

pub fn test_config() -> ClientConfig {
    ClientConfig::default()
        .with_api_base_url(API)
        .with_site_base_url(SITE)
        .with_graph_base_url(GRAPH)
}

pub fn client(transport: MockTransport) -> CoinMarketCap<MockTransport> {
    CoinMarketCap::with_transport(test_config(), transport)
}

pub fn listings_url() -> String {
    format!("{}/listings", API)
}

/// BTC, ETH, and a later duplicate ETH listing that must never win.
pub const LISTINGS: &str = r#"{
    "data": [
        {"id": 1, "name": "Bitcoin", "symbol": "BTC", "website_slug": "bitcoin"},
        {"id": 1027, "name": "Ethereum", "symbol": "ETH", "website_slug": "ethereum"},
        {"id": 52, "name": "XRP", "symbol": "XRP", "website_slug": "ripple"},
        {"id": 9999, "name": "Ether Clone", "symbol": "ETH", "website_slug": "ether-clone"}
    ],
    "metadata": {"timestamp": 1525137187, "num_cryptocurrencies": 4, "error": null}
}"#;

pub const ETH_TICKER: &str = r#"{
    "data": {
        "id": 1027,
        "name": "Ethereum",
        "symbol": "ETH",
        "website_slug": "ethereum",
        "rank": 2,
        "circulating_supply": 99151888.0,
        "total_supply": 99151888.0,
        "max_supply": null,
        "quotes": {
            "USD": {"price": 672.5, "volume_24h": 2730370000.0, "market_cap": 66680896784.0,
                    "percent_change_1h": 0.1, "percent_change_24h": -1.2, "percent_change_7d": 8.4},
            "EUR": {"price": 557.11, "volume_24h": 2261910000.0, "market_cap": 55238640000.0,
                    "percent_change_1h": 0.1, "percent_change_24h": -1.2, "percent_change_7d": 8.4}
        },
        "last_updated": 1525137255
    },
    "metadata": {"timestamp": 1525137187, "error": null}
}"#;
