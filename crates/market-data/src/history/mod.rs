//! Fixed-length series for charts and tables.
//!
//! - [`HistoryAggregator`] - last N mid rates of a currency
//! - [`GoldPriceFetcher`] - last N gold prices

mod aggregator;
mod gold;

pub use aggregator::{HistoryAggregator, DEFAULT_HISTORY_POINTS};
pub use gold::{GoldPriceFetcher, DEFAULT_GOLD_POINTS};
