//! Market data models
//!
//! This module contains the core data types for rate lookups:
//! - `types` - Validated identifiers (CurrencyCode, DateKey, RecentCount)
//! - `listing` - Currency reference table (CurrencyListing, CurrencyTable)
//! - `quote` - Published rates and resolution outcomes (Quotation, ResolutionResult)
//! - `series` - Chart data (HistorySeries, HistoryPoint, GoldPricePoint)

mod listing;
mod quote;
mod series;
mod types;

pub use listing::{CurrencyListing, CurrencyTable};
pub use quote::{Quotation, ResolutionResult};
pub use series::{GoldPricePoint, HistoryPoint, HistorySeries};
pub use types::{CurrencyCode, DateKey, RecentCount};
