use std::sync::Arc;

use crate::errors::MarketDataError;
use crate::models::{GoldPricePoint, RecentCount};
use crate::provider::RateSource;

/// Number of gold prices shown by default.
pub const DEFAULT_GOLD_POINTS: i64 = 10;

/// Passthrough over the source's gold price endpoint.
#[derive(Clone)]
pub struct GoldPriceFetcher {
    source: Arc<dyn RateSource>,
}

impl GoldPriceFetcher {
    pub fn new(source: Arc<dyn RateSource>) -> Self {
        Self { source }
    }

    /// Up to `count` most recent gold prices, oldest first.
    pub async fn fetch_recent(&self, count: i64) -> Result<Vec<GoldPricePoint>, MarketDataError> {
        let count = RecentCount::new(count)?;
        self.source.fetch_recent_gold_prices(count).await
    }
}
