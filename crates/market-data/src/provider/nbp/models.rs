//! NBP API response models.
//!
//! Field names follow the JSON the API returns for `?format=json`.

use serde::Deserialize;

/// One exchange-rate table from `/exchangerates/tables/a/`.
/// The endpoint returns an array holding a single table.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NbpTable {
    #[allow(dead_code)]
    pub table: String,
    pub no: Option<String>,
    pub effective_date: Option<String>,
    pub rates: Vec<NbpTableRate>,
}

/// Currency entry of a table
#[derive(Debug, Deserialize)]
pub struct NbpTableRate {
    /// Display name, e.g. "dolar amerykański"
    pub currency: String,
    pub code: String,
    // Note: mid exists here too but the table is only used as a reference list
}

/// Rate series from `/exchangerates/rates/a/{code}/...`
#[derive(Debug, Deserialize)]
pub struct NbpRateSeries {
    #[allow(dead_code)]
    pub table: String,
    #[allow(dead_code)]
    pub currency: String,
    pub code: String,
    pub rates: Vec<NbpRate>,
}

/// Single published rate within a series
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NbpRate {
    /// Table number, e.g. "004/A/NBP/2024"
    pub no: Option<String>,
    pub effective_date: String,
    pub mid: f64,
}

/// Gold price entry from `/cenyzlota/last/{count}/`
#[derive(Debug, Deserialize)]
pub struct NbpGoldPrice {
    /// Publication day
    pub data: String,
    /// PLN per gram
    pub cena: f64,
}
