use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::types::{CurrencyCode, DateKey};

/// One published mid rate for a currency against PLN.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quotation {
    /// Quoted currency
    pub currency: CurrencyCode,

    /// Day the rate applies to
    pub effective_date: DateKey,

    /// Mid rate in PLN
    pub mid_rate: Decimal,

    /// Source table number (e.g. "004/A/NBP/2024")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_no: Option<String>,
}

impl Quotation {
    /// Create a quotation with the required fields
    pub fn new(currency: CurrencyCode, effective_date: DateKey, mid_rate: Decimal) -> Self {
        Self {
            currency,
            effective_date,
            mid_rate,
            table_no: None,
        }
    }

    /// Attach the source table number
    pub fn with_table_no(mut self, table_no: impl Into<String>) -> Self {
        self.table_no = Some(table_no.into());
        self
    }
}

/// Outcome of a trading-day resolution.
///
/// Whether a fallback happened is derived from the dates, so it can never
/// disagree with them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolutionResult {
    requested_date: DateKey,
    quotation: Quotation,
}

impl ResolutionResult {
    pub(crate) fn new(requested_date: DateKey, quotation: Quotation) -> Self {
        Self {
            requested_date,
            quotation,
        }
    }

    pub fn requested_date(&self) -> DateKey {
        self.requested_date
    }

    pub fn quotation(&self) -> &Quotation {
        &self.quotation
    }

    pub fn into_quotation(self) -> Quotation {
        self.quotation
    }

    /// True iff the quotation is from a different day than requested.
    pub fn was_fallback(&self) -> bool {
        self.quotation.effective_date != self.requested_date
    }

    /// Calendar days between the requested and the resolved date.
    pub fn days_back(&self) -> i64 {
        self.requested_date.days_since(self.quotation.effective_date)
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ResolutionResultView<'a> {
    requested_date: DateKey,
    quotation: &'a Quotation,
    was_fallback: bool,
    days_back: i64,
}

impl Serialize for ResolutionResult {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        ResolutionResultView {
            requested_date: self.requested_date,
            quotation: &self.quotation,
            was_fallback: self.was_fallback(),
            days_back: self.days_back(),
        }
        .serialize(serializer)
    }
}
