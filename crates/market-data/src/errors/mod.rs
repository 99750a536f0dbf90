//! Error types and retry classification for the market data crate.
//!
//! This module provides:
//! - [`MarketDataError`]: The main error enum for all rate source operations
//! - [`RetryClass`]: Classification used by the trading-day resolver

mod retry;

pub use retry::RetryClass;

use thiserror::Error;

use crate::models::{CurrencyCode, DateKey};

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, MarketDataError>;

/// Errors that can occur during rate source operations.
///
/// Each variant is classified into a [`RetryClass`] via the
/// [`retry_class`](Self::retry_class) method, which the resolver uses to
/// decide whether to look at the previous day.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MarketDataError {
    /// Malformed or out-of-range caller input.
    /// Detected before any network call, or reported by the source as a bad request.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The source does not recognize the currency code.
    #[error("Unknown currency: {0}")]
    UnknownCurrency(CurrencyCode),

    /// No rate was published for this currency on this exact date.
    /// Recoverable by searching backward; never surfaces from the resolver.
    #[error("No quotation for {currency} on {date}")]
    NoQuotation {
        /// The currency that was looked up
        currency: CurrencyCode,
        /// The date without a quotation
        date: DateKey,
    },

    /// The backward search exhausted its horizon without finding a quotation.
    #[error("No quotation for {currency} within {searched_days} days before {requested}")]
    NoRecentQuotation {
        /// The currency that was looked up
        currency: CurrencyCode,
        /// The date originally requested
        requested: DateKey,
        /// How many calendar days back the search went
        searched_days: u32,
    },

    /// Network, transport, timeout, server-side or malformed-response failure.
    #[error("Source unavailable: {0}")]
    SourceUnavailable(String),
}

impl MarketDataError {
    /// Returns the retry classification for this error.
    ///
    /// # Examples
    ///
    /// ```
    /// use kursnbp_market_data::errors::{MarketDataError, RetryClass};
    ///
    /// let error = MarketDataError::SourceUnavailable("HTTP 503".to_string());
    /// assert_eq!(error.retry_class(), RetryClass::Never);
    /// ```
    pub fn retry_class(&self) -> RetryClass {
        match self {
            Self::NoQuotation { .. } => RetryClass::PreviousDay,

            Self::InvalidArgument(_)
            | Self::UnknownCurrency(_)
            | Self::NoRecentQuotation { .. }
            | Self::SourceUnavailable(_) => RetryClass::Never,
        }
    }
}

impl From<reqwest::Error> for MarketDataError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::SourceUnavailable(format!("Request timed out: {}", err))
        } else if err.is_decode() {
            Self::SourceUnavailable(format!("Malformed response: {}", err))
        } else {
            Self::SourceUnavailable(format!("Request failed: {}", err))
        }
    }
}

impl From<serde_json::Error> for MarketDataError {
    fn from(err: serde_json::Error) -> Self {
        Self::SourceUnavailable(format!("Malformed response: {}", err))
    }
}
