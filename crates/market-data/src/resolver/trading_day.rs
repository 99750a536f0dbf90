//! Trading-day resolution.
//!
//! Finds the quotation that applies to a requested day. Weekends and
//! holidays have no published rate, so the resolver walks back one calendar
//! day at a time until the source returns one or the search horizon runs out.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::errors::{MarketDataError, RetryClass};
use crate::models::{CurrencyCode, DateKey, ResolutionResult};
use crate::provider::RateSource;

/// Default number of calendar days the search may go back.
///
/// Covers the longest holiday clusters (Easter, Christmas to New Year) with margin.
pub const DEFAULT_MAX_DAYS_BACK: u32 = 10;

/// Bound on the backward search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchPolicy {
    /// Oldest day tried is `requested - max_days_back`. Zero tries only the requested day.
    pub max_days_back: u32,
}

impl SearchPolicy {
    pub fn new(max_days_back: u32) -> Self {
        Self { max_days_back }
    }
}

impl Default for SearchPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DAYS_BACK)
    }
}

/// Resolves (currency, date) to the most recent quotation on or before that date.
///
/// Attempts within one resolution are strictly sequential: the next day is
/// only requested once the previous attempt came back empty. Independent
/// resolutions share nothing mutable and may run concurrently. Dropping the
/// returned future abandons the pending request.
///
/// # Example
///
/// ```ignore
/// let resolver = TradingDayResolver::new(Arc::new(provider));
/// let result = resolver.resolve(&usd, DateKey::parse("2024-01-06")?).await?;
/// assert!(result.was_fallback()); // Saturday -> Friday
/// ```
#[derive(Clone)]
pub struct TradingDayResolver {
    source: Arc<dyn RateSource>,
    policy: SearchPolicy,
}

impl TradingDayResolver {
    pub fn new(source: Arc<dyn RateSource>) -> Self {
        Self {
            source,
            policy: SearchPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: SearchPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> SearchPolicy {
        self.policy
    }

    /// Resolve the quotation for `currency` applicable on `requested`.
    ///
    /// # Errors
    ///
    /// - `NoRecentQuotation` when nothing was published within the horizon
    /// - `UnknownCurrency`, `SourceUnavailable`, `InvalidArgument` unchanged
    ///   from the source, without stepping back
    pub async fn resolve(
        &self,
        currency: &CurrencyCode,
        requested: DateKey,
    ) -> Result<ResolutionResult, MarketDataError> {
        let mut date = requested;

        loop {
            let err = match self.source.fetch_rate_for_date(currency, date).await {
                Ok(quotation) => {
                    if quotation.effective_date > requested {
                        return Err(MarketDataError::SourceUnavailable(format!(
                            "{} returned {} for {} requested on {}",
                            self.source.id(),
                            quotation.effective_date,
                            currency,
                            requested
                        )));
                    }
                    return Ok(ResolutionResult::new(requested, quotation));
                }
                Err(err) => err,
            };

            match err.retry_class() {
                RetryClass::Never => return Err(err),
                RetryClass::PreviousDay => {
                    let searched_days = u32::try_from(requested.days_since(date)).unwrap_or(u32::MAX);
                    let previous = date
                        .previous()
                        .filter(|_| searched_days < self.policy.max_days_back);

                    match previous {
                        Some(previous) => {
                            debug!(
                                "No {} quotation for {} on {}, trying {}",
                                self.source.id(),
                                currency,
                                date,
                                previous
                            );
                            date = previous;
                        }
                        None => {
                            warn!(
                                "No {} quotation for {} within {} days before {}",
                                self.source.id(),
                                currency,
                                searched_days,
                                requested
                            );
                            return Err(MarketDataError::NoRecentQuotation {
                                currency: currency.clone(),
                                requested,
                                searched_days,
                            });
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{code, day, Call, MockRateSource};
    use proptest::prelude::*;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use std::time::Duration;

    fn resolver(source: &Arc<MockRateSource>) -> TradingDayResolver {
        TradingDayResolver::new(source.clone())
    }

    /// Week of 2024-01-01: Monday is a holiday, rates Tuesday to Friday.
    fn first_week_of_2024() -> MockRateSource {
        MockRateSource::new()
            .with_rate("USD", "2023-12-29", dec!(3.9350))
            .with_rate("USD", "2024-01-02", dec!(3.9432))
            .with_rate("USD", "2024-01-03", dec!(3.9909))
            .with_rate("USD", "2024-01-04", dec!(3.9684))
            .with_rate("USD", "2024-01-05", dec!(3.9850))
    }

    #[tokio::test]
    async fn test_trading_day_is_not_fallback() {
        let source = Arc::new(first_week_of_2024());

        let result = resolver(&source)
            .resolve(&code("USD"), day("2024-01-04"))
            .await
            .unwrap();

        assert!(!result.was_fallback());
        assert_eq!(result.quotation().effective_date, day("2024-01-04"));
        assert_eq!(result.quotation().mid_rate, dec!(3.9684));
        assert_eq!(source.call_count(), 1);
    }

    #[tokio::test]
    async fn test_saturday_falls_back_to_friday() {
        let source = Arc::new(first_week_of_2024());

        let result = resolver(&source)
            .resolve(&code("USD"), day("2024-01-06"))
            .await
            .unwrap();

        assert!(result.was_fallback());
        assert_eq!(result.requested_date(), day("2024-01-06"));
        assert_eq!(result.quotation().effective_date, day("2024-01-05"));
        assert_eq!(result.days_back(), 1);
    }

    #[tokio::test]
    async fn test_walks_back_one_day_at_a_time() {
        let source = Arc::new(first_week_of_2024());

        // New Year holiday: Monday 2024-01-01 and the weekend before it.
        let result = resolver(&source)
            .resolve(&code("USD"), day("2024-01-01"))
            .await
            .unwrap();

        assert_eq!(result.quotation().effective_date, day("2023-12-29"));
        assert_eq!(result.days_back(), 3);
        assert_eq!(
            source.calls(),
            vec![
                Call::RateForDate("USD".into(), day("2024-01-01")),
                Call::RateForDate("USD".into(), day("2023-12-31")),
                Call::RateForDate("USD".into(), day("2023-12-30")),
                Call::RateForDate("USD".into(), day("2023-12-29")),
            ]
        );
    }

    #[tokio::test]
    async fn test_horizon_exhausted() {
        let source = Arc::new(MockRateSource::new().with_currency("USD"));

        let err = resolver(&source)
            .resolve(&code("USD"), day("2024-01-06"))
            .await
            .unwrap_err();

        assert_eq!(
            err,
            MarketDataError::NoRecentQuotation {
                currency: code("USD"),
                requested: day("2024-01-06"),
                searched_days: DEFAULT_MAX_DAYS_BACK,
            }
        );
        // requested day plus every day back to the horizon
        assert_eq!(source.call_count(), DEFAULT_MAX_DAYS_BACK as usize + 1);
    }

    #[tokio::test]
    async fn test_quotation_just_inside_horizon() {
        let source = Arc::new(
            MockRateSource::new().with_rate("USD", "2024-01-01", dec!(3.93)),
        );

        let result = resolver(&source)
            .with_policy(SearchPolicy::new(3))
            .resolve(&code("USD"), day("2024-01-04"))
            .await
            .unwrap();
        assert_eq!(result.days_back(), 3);

        let err = resolver(&source)
            .with_policy(SearchPolicy::new(2))
            .resolve(&code("USD"), day("2024-01-04"))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            MarketDataError::NoRecentQuotation { searched_days: 2, .. }
        ));
    }

    #[tokio::test]
    async fn test_zero_horizon_only_tries_requested_day() {
        let source = Arc::new(first_week_of_2024());

        let err = resolver(&source)
            .with_policy(SearchPolicy::new(0))
            .resolve(&code("USD"), day("2024-01-06"))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            MarketDataError::NoRecentQuotation { searched_days: 0, .. }
        ));
        assert_eq!(source.call_count(), 1);
    }

    #[tokio::test]
    async fn test_unknown_currency_is_not_retried() {
        let source = Arc::new(first_week_of_2024());

        let err = resolver(&source)
            .resolve(&code("XYZ"), day("2024-01-06"))
            .await
            .unwrap_err();

        assert_eq!(err, MarketDataError::UnknownCurrency(code("XYZ")));
        assert_eq!(source.call_count(), 1);
    }

    #[tokio::test]
    async fn test_source_unavailable_is_not_retried() {
        let source = Arc::new(first_week_of_2024().unavailable());

        let err = resolver(&source)
            .resolve(&code("USD"), day("2024-01-06"))
            .await
            .unwrap_err();

        assert!(matches!(err, MarketDataError::SourceUnavailable(_)));
        assert_eq!(source.call_count(), 1);
    }

    #[tokio::test]
    async fn test_resolution_is_idempotent() {
        let source = Arc::new(first_week_of_2024());
        let resolver = resolver(&source);

        let first = resolver.resolve(&code("USD"), day("2024-01-07")).await.unwrap();
        let second = resolver.resolve(&code("USD"), day("2024-01-07")).await.unwrap();

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_attempts_are_sequential() {
        let source = Arc::new(first_week_of_2024());

        resolver(&source)
            .resolve(&code("USD"), day("2024-01-01"))
            .await
            .unwrap();

        assert_eq!(source.max_in_flight(), 1);
    }

    #[tokio::test]
    async fn test_independent_resolutions_may_overlap() {
        let source = Arc::new(first_week_of_2024());
        let resolver = resolver(&source);

        let usd = code("USD");
        let (saturday, monday) = futures::join!(
            resolver.resolve(&usd, day("2024-01-06")),
            resolver.resolve(&usd, day("2024-01-01")),
        );

        assert_eq!(saturday.unwrap().quotation().effective_date, day("2024-01-05"));
        assert_eq!(monday.unwrap().quotation().effective_date, day("2023-12-29"));
    }

    #[tokio::test]
    async fn test_dropping_resolution_cancels_it() {
        let source = Arc::new(first_week_of_2024().hanging());

        let outcome = tokio::time::timeout(
            Duration::from_millis(20),
            resolver(&source).resolve(&code("USD"), day("2024-01-06")),
        )
        .await;

        assert!(outcome.is_err());
        assert_eq!(source.call_count(), 1);
    }

    proptest! {
        /// The resolved day is the nearest quoted day within the horizon.
        #[test]
        fn prop_resolves_nearest_prior_quoted_day(
            quoted in proptest::collection::vec(any::<bool>(), 15),
            max_days_back in 0u32..14,
        ) {
            let requested = day("2024-04-01");
            let mut source = MockRateSource::new().with_currency("EUR");
            let mut date = requested;
            for (offset, has_rate) in quoted.iter().enumerate() {
                if *has_rate {
                    source = source.with_rate("EUR", &date.to_string(), Decimal::from(offset as i64 + 4));
                }
                date = date.previous().unwrap();
            }
            let source = Arc::new(source);

            let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();
            let outcome = runtime.block_on(
                resolver(&source)
                    .with_policy(SearchPolicy::new(max_days_back))
                    .resolve(&code("EUR"), requested),
            );

            let expected = quoted
                .iter()
                .take(max_days_back as usize + 1)
                .position(|has_rate| *has_rate);

            match (expected, outcome) {
                (Some(offset), Ok(result)) => {
                    prop_assert_eq!(result.days_back(), offset as i64);
                    prop_assert_eq!(result.was_fallback(), offset > 0);
                    prop_assert!(result.quotation().effective_date <= requested);
                    prop_assert_eq!(source.call_count(), offset + 1);
                }
                (None, Err(MarketDataError::NoRecentQuotation { searched_days, .. })) => {
                    prop_assert_eq!(searched_days, max_days_back);
                    prop_assert_eq!(source.call_count(), max_days_back as usize + 1);
                }
                (expected, outcome) => {
                    prop_assert!(false, "expected {:?}, got {:?}", expected, outcome);
                }
            }
        }
    }
}
