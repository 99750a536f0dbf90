use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::types::{CurrencyCode, DateKey};

/// One point of a rate chart.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryPoint {
    pub date: DateKey,
    pub price: Decimal,
}

/// Recent mid rates for one currency, strictly ascending by date.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HistorySeries {
    pub currency: CurrencyCode,
    points: Vec<HistoryPoint>,
}

impl HistorySeries {
    /// Build a series, sorting by date and dropping repeated dates
    /// (the first point for a date is kept).
    pub fn new(currency: CurrencyCode, mut points: Vec<HistoryPoint>) -> Self {
        points.sort_by_key(|p| p.date);
        points.dedup_by_key(|p| p.date);
        Self { currency, points }
    }

    pub fn points(&self) -> &[HistoryPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Option<&HistoryPoint> {
        self.points.first()
    }

    pub fn last(&self) -> Option<&HistoryPoint> {
        self.points.last()
    }

    /// Lowest and highest price, for chart scaling.
    pub fn price_range(&self) -> Option<(Decimal, Decimal)> {
        let mut prices = self.points.iter().map(|p| p.price);
        let first = prices.next()?;
        Some(prices.fold((first, first), |(lo, hi), p| (lo.min(p), hi.max(p))))
    }
}

/// Price of one gram of gold in PLN on a given day.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoldPricePoint {
    pub date: DateKey,
    pub price_per_gram: Decimal,
}
