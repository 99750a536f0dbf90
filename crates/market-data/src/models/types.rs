//! Strong types for rate lookups.
//!
//! - `CurrencyCode` - 3-letter code as published by the reference table
//! - `DateKey` - calendar day, canonical "YYYY-MM-DD"
//! - `RecentCount` - validated "last N" count

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::MarketDataError;

// =============================================================================
// CurrencyCode
// =============================================================================

/// Currency code as published by the source (e.g. "USD", "EUR").
///
/// Always exactly three ASCII letters. Case is preserved because the
/// source treats codes as published.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CurrencyCode(String);

impl CurrencyCode {
    /// Length of every code.
    pub const LEN: usize = 3;

    /// Parses and validates a currency code.
    pub fn parse(code: &str) -> Result<Self, MarketDataError> {
        if code.len() != Self::LEN || !code.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(MarketDataError::InvalidArgument(format!(
                "currency code must be {} ASCII letters, got {:?}",
                Self::LEN,
                code
            )));
        }
        Ok(Self(code.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for CurrencyCode {
    type Err = MarketDataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for CurrencyCode {
    type Error = MarketDataError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<CurrencyCode> for String {
    fn from(code: CurrencyCode) -> Self {
        code.0
    }
}

impl AsRef<str> for CurrencyCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// =============================================================================
// DateKey
// =============================================================================

/// A calendar day with day granularity.
///
/// Serialized and displayed as "YYYY-MM-DD", the format the source uses
/// for path parameters and `effectiveDate` fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DateKey(NaiveDate);

impl DateKey {
    pub const FORMAT: &'static str = "%Y-%m-%d";

    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Creates a DateKey from year, month, day components.
    /// Returns None if the date is invalid.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    /// Parses "YYYY-MM-DD".
    pub fn parse(s: &str) -> Result<Self, MarketDataError> {
        NaiveDate::parse_from_str(s, Self::FORMAT)
            .map(Self)
            .map_err(|e| MarketDataError::InvalidArgument(format!("invalid date {:?}: {}", s, e)))
    }

    /// Returns today's date in UTC.
    pub fn today() -> Self {
        Self(chrono::Utc::now().date_naive())
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// The calendar day before this one, or None at the start of the calendar.
    pub fn previous(&self) -> Option<Self> {
        self.0.pred_opt().map(Self)
    }

    /// Signed number of days from `earlier` to `self`.
    pub fn days_since(&self, earlier: DateKey) -> i64 {
        (self.0 - earlier.0).num_days()
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(Self::FORMAT))
    }
}

impl FromStr for DateKey {
    type Err = MarketDataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<NaiveDate> for DateKey {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl From<DateKey> for NaiveDate {
    fn from(day: DateKey) -> Self {
        day.0
    }
}

// =============================================================================
// RecentCount
// =============================================================================

/// Number of most recent entries to request from a "last N" endpoint.
///
/// Always within `1..=RecentCount::MAX`; the source rejects larger values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct RecentCount(u32);

impl RecentCount {
    /// Largest count the source accepts for `last/{n}` queries.
    pub const MAX: u32 = 255;

    pub fn new(count: i64) -> Result<Self, MarketDataError> {
        if count < 1 {
            return Err(MarketDataError::InvalidArgument(format!(
                "count must be a positive integer, got {}",
                count
            )));
        }
        if count > i64::from(Self::MAX) {
            return Err(MarketDataError::InvalidArgument(format!(
                "count must not exceed {}, got {}",
                Self::MAX,
                count
            )));
        }
        Ok(Self(count as u32))
    }

    pub fn get(&self) -> u32 {
        self.0
    }
}

impl TryFrom<i64> for RecentCount {
    type Error = MarketDataError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for RecentCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
