//! kursnbp Market Data Crate
//!
//! Exchange rates and gold prices from the National Bank of Poland (NBP)
//! public API, with resolution of rates for non-trading days.
//!
//! # Architecture
//!
//! ```text
//! +------------------+     +--------------------+     +------------------+
//! | TradingDay       |     | HistoryAggregator  |     | GoldPriceFetcher |
//! | Resolver         |     |                    |     |                  |
//! +------------------+     +--------------------+     +------------------+
//!          |  (loop, one day back per attempt)  |                |
//!          v                                    v                v
//!                      +-------------------------+
//!                      |   RateSource (trait)    |
//!                      +-------------------------+
//!                                  |
//!                                  v
//!                      +-------------------------+
//!                      |      NbpProvider        |  (reqwest, one call per op)
//!                      +-------------------------+
//! ```
//!
//! # Core Types
//!
//! - [`CurrencyCode`] - validated 3-letter code
//! - [`DateKey`] - calendar day, "YYYY-MM-DD"
//! - [`Quotation`] - one published mid rate
//! - [`ResolutionResult`] - quotation plus whether a fallback happened
//! - [`HistorySeries`] / [`GoldPricePoint`] - chart data
//! - [`MarketDataError`] - error taxonomy shared by every operation

pub mod errors;
pub mod history;
pub mod models;
pub mod provider;
pub mod resolver;

#[cfg(test)]
mod test_support;

pub use errors::{MarketDataError, Result, RetryClass};

pub use models::{
    CurrencyCode, CurrencyListing, CurrencyTable, DateKey, GoldPricePoint, HistoryPoint,
    HistorySeries, Quotation, RecentCount, ResolutionResult,
};

pub use provider::{NbpConfig, NbpProvider, RateSource};

pub use history::{GoldPriceFetcher, HistoryAggregator, DEFAULT_GOLD_POINTS, DEFAULT_HISTORY_POINTS};
pub use resolver::{SearchPolicy, TradingDayResolver, DEFAULT_MAX_DAYS_BACK};
