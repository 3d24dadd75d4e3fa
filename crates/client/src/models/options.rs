//! Per-operation request options.

/// Sort order accepted by the tickers endpoint.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TickerSort {
    Id,
    Rank,
    Volume24h,
    PercentChange24h,
}

impl TickerSort {
    pub fn as_str(&self) -> &'static str {
        match self {
            TickerSort::Id => "id",
            TickerSort::Rank => "rank",
            TickerSort::Volume24h => "volume_24h",
            TickerSort::PercentChange24h => "percent_change_24h",
        }
    }
}

/// Options for [`crate::CoinMarketCap::tickers`]. `None` fields are omitted
/// from the query string.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TickersOptions {
    pub start: Option<u32>,
    pub limit: Option<u32>,
    pub convert: Option<String>,
    pub sort: Option<TickerSort>,
}

impl TickersOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(mut self, start: u32) -> Self {
        self.start = Some(start);
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn convert(mut self, currency: impl Into<String>) -> Self {
        self.convert = Some(currency.into());
        self
    }

    pub fn sort(mut self, sort: TickerSort) -> Self {
        self.sort = Some(sort);
        self
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TickerOptions {
    pub symbol: String,
    pub convert: Option<String>,
}

impl TickerOptions {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            convert: None,
        }
    }

    pub fn convert(mut self, currency: impl Into<String>) -> Self {
        self.convert = Some(currency.into());
        self
    }
}

/// Graph range for a coin. `start` and `end` are Unix seconds.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TickerGraphOptions {
    pub symbol: String,
    pub start: i64,
    pub end: i64,
}

/// Graph range for the global or altcoin market. Unix seconds.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MarketGraphOptions {
    pub start: i64,
    pub end: i64,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct GlobalMarketOptions {
    pub convert: Option<String>,
}

/// At least one of `symbol` or `slug` must be non-empty. `slug` wins when
/// both are given.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MarketsOptions {
    pub symbol: Option<String>,
    pub slug: Option<String>,
}

impl MarketsOptions {
    pub fn by_symbol(symbol: impl Into<String>) -> Self {
        Self {
            symbol: Some(symbol.into()),
            slug: None,
        }
    }

    pub fn by_slug(slug: impl Into<String>) -> Self {
        Self {
            symbol: None,
            slug: Some(slug.into()),
        }
    }
}

/// `convert` defaults to `USD` when absent.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PriceOptions {
    pub symbol: String,
    pub convert: Option<String>,
}

impl PriceOptions {
    pub fn new(symbol: impl Into<String>, convert: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            convert: Some(convert.into()),
        }
    }
}
