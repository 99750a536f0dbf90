use std::sync::Arc;

use tracing::debug;

use crate::errors::MarketDataError;
use crate::models::{CurrencyCode, HistoryPoint, HistorySeries, RecentCount};
use crate::provider::RateSource;

/// Number of points shown on the rate chart.
pub const DEFAULT_HISTORY_POINTS: i64 = 30;

/// Builds chart series from the source's "last N" endpoint.
///
/// The endpoint only returns trading days, so no fallback is involved.
#[derive(Clone)]
pub struct HistoryAggregator {
    source: Arc<dyn RateSource>,
}

impl HistoryAggregator {
    pub fn new(source: Arc<dyn RateSource>) -> Self {
        Self { source }
    }

    /// Fetch up to `count` most recent mid rates for `currency`, oldest first.
    ///
    /// `count` is validated before any request; non-positive values fail
    /// with `InvalidArgument`. Source errors are returned unchanged.
    pub async fn build_history(
        &self,
        currency: &CurrencyCode,
        count: i64,
    ) -> Result<HistorySeries, MarketDataError> {
        let count = RecentCount::new(count)?;
        let quotations = self.source.fetch_recent_rates(currency, count).await?;

        debug!(
            "{} returned {} of {} requested {} rates",
            self.source.id(),
            quotations.len(),
            count,
            currency
        );

        let points = quotations
            .into_iter()
            .map(|q| HistoryPoint {
                date: q.effective_date,
                price: q.mid_rate,
            })
            .collect();

        Ok(HistorySeries::new(currency.clone(), points))
    }
}
