//! Trading-day rate resolution.
//!
//! The source only answers "what was published on exactly this day". The
//! resolver turns that into "what rate applies on this day":
//!
//! ```text
//!   resolve(USD, Sat 2024-01-06)
//!        │
//!        ▼
//!   fetch_rate_for_date(USD, 2024-01-06) ── NoQuotation ──┐
//!                                                         ▼
//!   fetch_rate_for_date(USD, 2024-01-05) ── Ok ──► ResolutionResult
//!                                                  { requested: 2024-01-06,
//!                                                    effective: 2024-01-05,
//!                                                    was_fallback: true }
//! ```
//!
//! The walk only moves backward and stops after
//! [`SearchPolicy::max_days_back`] days with `NoRecentQuotation`. Errors
//! other than `NoQuotation` stop it immediately.

mod trading_day;

pub use trading_day::{SearchPolicy, TradingDayResolver, DEFAULT_MAX_DAYS_BACK};
