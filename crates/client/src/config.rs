//! Client configuration.
//!
//! Base URLs are explicit so tests can point the client at a double and
//! mirrors can be used without touching process-wide state.

use std::time::Duration;

/// Default API base URL
pub const DEFAULT_API_BASE_URL: &str = "https://api.coinmarketcap.com/v2";

/// Default website base URL, used for the scraped pages
pub const DEFAULT_SITE_BASE_URL: &str = "https://coinmarketcap.com";

/// Default graph service base URL
pub const DEFAULT_GRAPH_BASE_URL: &str = "https://graphs2.coinmarketcap.com";

/// Default HTTP request timeout
const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Upper bound on exchange-ranking pages walked by a single call.
const DEFAULT_MAX_EXCHANGE_PAGES: u32 = 100;

#[derive(Clone, Debug, PartialEq)]
pub struct ClientConfig {
    pub api_base_url: String,
    pub site_base_url: String,
    pub graph_base_url: String,
    pub request_timeout: Duration,
    pub user_agent: String,
    /// Safety cap for [`crate::CoinMarketCap::exchanges`].
    pub max_exchange_pages: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            site_base_url: DEFAULT_SITE_BASE_URL.to_string(),
            graph_base_url: DEFAULT_GRAPH_BASE_URL.to_string(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            user_agent: format!("coinmarketcap-client/{}", env!("CARGO_PKG_VERSION")),
            max_exchange_pages: DEFAULT_MAX_EXCHANGE_PAGES,
        }
    }
}

impl ClientConfig {
    /// Defaults overlaid with `CMC_API_URL`, `CMC_SITE_URL`, `CMC_GRAPH_URL`,
    /// `CMC_REQUEST_TIMEOUT_MS` and `CMC_MAX_EXCHANGE_PAGES`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let url = |key: &str| {
            var(key)
                .map(|v| normalize_base_url(&v))
                .filter(|v| !v.is_empty())
        };

        let timeout_ms: Option<u64> =
            var("CMC_REQUEST_TIMEOUT_MS").and_then(|v| v.trim().parse().ok());
        let max_pages: Option<u32> = var("CMC_MAX_EXCHANGE_PAGES")
            .and_then(|v| v.trim().parse().ok())
            .filter(|v| *v > 0);

        Self {
            api_base_url: url("CMC_API_URL").unwrap_or(defaults.api_base_url),
            site_base_url: url("CMC_SITE_URL").unwrap_or(defaults.site_base_url),
            graph_base_url: url("CMC_GRAPH_URL").unwrap_or(defaults.graph_base_url),
            request_timeout: timeout_ms
                .map(Duration::from_millis)
                .unwrap_or(defaults.request_timeout),
            user_agent: defaults.user_agent,
            max_exchange_pages: max_pages.unwrap_or(defaults.max_exchange_pages),
        }
    }

    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = normalize_base_url(&url.into());
        self
    }

    pub fn with_site_base_url(mut self, url: impl Into<String>) -> Self {
        self.site_base_url = normalize_base_url(&url.into());
        self
    }

    pub fn with_graph_base_url(mut self, url: impl Into<String>) -> Self {
        self.graph_base_url = normalize_base_url(&url.into());
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn with_max_exchange_pages(mut self, pages: u32) -> Self {
        self.max_exchange_pages = pages.max(1);
        self
    }
}

fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}
