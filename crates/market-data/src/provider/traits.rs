//! Rate source trait definitions.
//!
//! This module defines the `RateSource` trait that the resolver, the history
//! aggregator and the gold fetcher call into.

use async_trait::async_trait;

use crate::errors::MarketDataError;
use crate::models::{
    CurrencyCode, CurrencyTable, DateKey, GoldPricePoint, Quotation, RecentCount,
};

/// Trait for exchange-rate sources.
///
/// Every method issues exactly one request against the source. Callers that
/// need more (the trading-day resolver) call repeatedly.
///
/// # Example
///
/// ```ignore
/// use async_trait::async_trait;
/// use kursnbp_market_data::provider::RateSource;
///
/// struct FixtureSource {
///     rates: HashMap<DateKey, Decimal>,
/// }
///
/// #[async_trait]
/// impl RateSource for FixtureSource {
///     fn id(&self) -> &'static str {
///         "FIXTURE"
///     }
///
///     // ... implement fetch methods
/// }
/// ```
#[async_trait]
pub trait RateSource: Send + Sync {
    /// Unique identifier for this source, used in logs.
    fn id(&self) -> &'static str;

    /// Fetch the currency reference table.
    ///
    /// Fails with `SourceUnavailable` on transport errors or malformed data.
    async fn fetch_currency_table(&self) -> Result<CurrencyTable, MarketDataError>;

    /// Fetch the mid rate published for `currency` on exactly `date`.
    ///
    /// # Returns
    ///
    /// - `NoQuotation` when nothing was published that day
    /// - `UnknownCurrency` when the source does not know the code
    /// - `SourceUnavailable` for transport and server failures
    async fn fetch_rate_for_date(
        &self,
        currency: &CurrencyCode,
        date: DateKey,
    ) -> Result<Quotation, MarketDataError>;

    /// Fetch up to `count` most recent quotations, oldest first.
    async fn fetch_recent_rates(
        &self,
        currency: &CurrencyCode,
        count: RecentCount,
    ) -> Result<Vec<Quotation>, MarketDataError>;

    /// Fetch up to `count` most recent gold prices, oldest first.
    async fn fetch_recent_gold_prices(
        &self,
        count: RecentCount,
    ) -> Result<Vec<GoldPricePoint>, MarketDataError>;
}
