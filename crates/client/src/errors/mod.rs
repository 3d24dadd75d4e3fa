//! Error types and retry classification for the client.
//!
//! This module provides:
//! - [`MarketDataError`]: The error enum for every client operation
//! - [`RetryClass`]: Classification callers can use to decide on retries

mod retry;

pub use retry::RetryClass;

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, MarketDataError>;

/// Errors that can occur while fetching or extracting market data.
///
/// Numeric and date coercion of scraped cells never produces an error; see
/// [`crate::parse`] for that policy.
#[derive(Error, Debug)]
pub enum MarketDataError {
    /// The request never produced a response (DNS, TLS, refused connection).
    #[error("Connection error for {url}: {message}")]
    Connection {
        /// The URL being fetched
        url: String,
        /// The underlying transport message
        message: String,
    },

    /// The request timed out before a response arrived.
    #[error("Timeout: {url}")]
    Timeout {
        /// The URL being fetched
        url: String,
    },

    /// The server answered with a non-success status.
    /// The response body is kept as diagnostic text.
    #[error("HTTP {status}: {body}")]
    HttpStatus {
        /// The URL being fetched
        url: String,
        /// HTTP status code
        status: u16,
        /// Raw response body
        body: String,
    },

    /// The payload could not be decoded: malformed JSON, a missing table,
    /// or a row with fewer cells than the layout requires.
    #[error("Failed to decode {context}: {message}")]
    Decode {
        /// What was being decoded (e.g. "tickers response")
        context: String,
        /// Parser or layout message
        message: String,
    },

    /// The API reported an error inside an otherwise successful response.
    #[error("Upstream error: {0}")]
    Upstream(String),

    /// A symbol, coin or quote currency could not be resolved.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The caller supplied insufficient or contradictory options.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A page of the exchange rankings failed while walking all pages.
    #[error("Exchanges error: {0}")]
    Exchanges(#[source] Box<MarketDataError>),
}

impl MarketDataError {
    pub(crate) fn decode(context: impl Into<String>, message: impl ToString) -> Self {
        Self::Decode {
            context: context.into(),
            message: message.to_string(),
        }
    }

    /// Returns the retry classification for this error.
    ///
    /// # Examples
    ///
    /// ```
    /// use coinmarketcap_client::errors::{MarketDataError, RetryClass};
    ///
    /// let error = MarketDataError::Timeout { url: "https://api.coinmarketcap.com/v2/listings".to_string() };
    /// assert_eq!(error.retry_class(), RetryClass::WithBackoff);
    ///
    /// let error = MarketDataError::NotFound("XYZ".to_string());
    /// assert_eq!(error.retry_class(), RetryClass::Never);
    /// ```
    pub fn retry_class(&self) -> RetryClass {
        match self {
            Self::Connection { .. } | Self::Timeout { .. } => RetryClass::WithBackoff,

            Self::HttpStatus { status, .. } if *status == 429 || *status >= 500 => {
                RetryClass::WithBackoff
            }

            Self::Exchanges(inner) => inner.retry_class(),

            Self::HttpStatus { .. }
            | Self::Decode { .. }
            | Self::Upstream(_)
            | Self::NotFound(_)
            | Self::InvalidArgument(_) => RetryClass::Never,
        }
    }

    /// True when a symbol, coin or quote could not be resolved.
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::NotFound(_) => true,
            Self::Exchanges(inner) => inner.is_not_found(),
            _ => false,
        }
    }
}
