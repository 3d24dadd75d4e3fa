use async_trait::async_trait;

use crate::errors::Result;

/// Fetches the body of a URL.
///
/// Implementations must:
/// - return [`MarketDataError::HttpStatus`](crate::errors::MarketDataError::HttpStatus)
///   for any non-2xx status, carrying the response body
/// - report failures that produced no response as
///   [`MarketDataError::Connection`](crate::errors::MarketDataError::Connection) or
///   [`MarketDataError::Timeout`](crate::errors::MarketDataError::Timeout)
/// - never retry
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, url: &str) -> Result<String>;
}
