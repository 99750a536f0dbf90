//! NBP (Narodowy Bank Polski) rate source.
//!
//! # API Endpoints
//!
//! - Reference table: `{base}/exchangerates/tables/a/`
//! - Single day: `{base}/exchangerates/rates/a/{code}/{date}/`
//! - Last N rates: `{base}/exchangerates/rates/a/{code}/last/{count}/`
//! - Last N gold prices: `{base}/cenyzlota/last/{count}/`
//!
//! All requests carry `?format=json`. The API answers 404 when a day has no
//! published rate and 400 when it rejects the parameters. The single-day
//! endpoint also answers 404 for codes it does not know, so a 404 there is
//! checked against the reference table before it counts as a missing day.

mod models;

use std::sync::Arc;

use async_trait::async_trait;
use num_traits::FromPrimitive;
use reqwest::{Client, StatusCode};
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use tokio::sync::OnceCell;
use tracing::{debug, warn};

use crate::errors::MarketDataError;
use crate::models::{
    CurrencyCode, CurrencyListing, CurrencyTable, DateKey, GoldPricePoint, Quotation, RecentCount,
};
use crate::provider::{NbpConfig, RateSource};

use models::{NbpGoldPrice, NbpRateSeries, NbpTable};

const PROVIDER_ID: &str = "NBP";

/// What a 404 means depends on the endpoint.
#[derive(Clone, Debug)]
enum NotFound {
    /// No rate published that day
    NoQuotation(CurrencyCode, DateKey),
    /// The currency has no series at all
    UnknownCurrency(CurrencyCode),
    /// The endpoint itself should always exist
    Unavailable,
}

impl NotFound {
    fn into_error(self) -> MarketDataError {
        match self {
            Self::NoQuotation(currency, date) => MarketDataError::NoQuotation { currency, date },
            Self::UnknownCurrency(currency) => MarketDataError::UnknownCurrency(currency),
            Self::Unavailable => {
                MarketDataError::SourceUnavailable("HTTP error: 404 Not Found".to_string())
            }
        }
    }
}

/// NBP provider for table A exchange rates and gold prices.
///
/// # Example
///
/// ```ignore
/// let provider = NbpProvider::new(NbpConfig::default())?;
/// let table = provider.fetch_currency_table().await?;
/// let provider = provider.with_currency_table(table);
/// ```
///
/// Without an attached table the provider loads one, once, the first time a
/// single-day request comes back 404. Clones share that table.
#[derive(Clone)]
pub struct NbpProvider {
    client: Client,
    config: NbpConfig,
    known_currencies: Arc<OnceCell<CurrencyTable>>,
}

impl NbpProvider {
    /// Create a provider. The request timeout from `config` applies to every call.
    pub fn new(config: NbpConfig) -> Result<Self, MarketDataError> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| {
                MarketDataError::SourceUnavailable(format!("Failed to build HTTP client: {}", e))
            })?;

        Ok(Self {
            client,
            config,
            known_currencies: Arc::new(OnceCell::new()),
        })
    }

    /// Reject codes missing from this table before any request is made.
    pub fn with_currency_table(mut self, table: CurrencyTable) -> Self {
        self.known_currencies = Arc::new(OnceCell::from(table));
        self
    }

    pub fn config(&self) -> &NbpConfig {
        &self.config
    }

    fn ensure_known(&self, currency: &CurrencyCode) -> Result<(), MarketDataError> {
        match self.known_currencies.get() {
            Some(table) if !table.contains(currency) => {
                Err(MarketDataError::UnknownCurrency(currency.clone()))
            }
            _ => Ok(()),
        }
    }

    async fn reference_table(&self) -> Result<&CurrencyTable, MarketDataError> {
        self.known_currencies
            .get_or_try_init(|| async {
                debug!("{} loading reference table to classify a 404", PROVIDER_ID);
                let tables: Vec<NbpTable> =
                    self.fetch(&self.table_url(), NotFound::Unavailable).await?;
                table_from_response(tables)
            })
            .await
    }

    /// Decide whether a single-day 404 is a missing day or an unknown code.
    async fn classify_missing_day(
        &self,
        currency: &CurrencyCode,
        missing: MarketDataError,
    ) -> MarketDataError {
        match self.reference_table().await {
            Ok(table) if table.contains(currency) => missing,
            Ok(_) => MarketDataError::UnknownCurrency(currency.clone()),
            Err(err) => err,
        }
    }

    fn table_url(&self) -> String {
        format!("{}/exchangerates/tables/a/", self.config.base_url)
    }

    fn rate_for_date_url(&self, currency: &CurrencyCode, date: DateKey) -> String {
        format!(
            "{}/exchangerates/rates/a/{}/{}/",
            self.config.base_url, currency, date
        )
    }

    fn recent_rates_url(&self, currency: &CurrencyCode, count: RecentCount) -> String {
        format!(
            "{}/exchangerates/rates/a/{}/last/{}/",
            self.config.base_url, currency, count
        )
    }

    fn gold_url(&self, count: RecentCount) -> String {
        format!("{}/cenyzlota/last/{}/", self.config.base_url, count)
    }

    /// Issue one GET and decode the JSON body.
    async fn fetch<T: DeserializeOwned>(
        &self,
        url: &str,
        not_found: NotFound,
    ) -> Result<T, MarketDataError> {
        debug!("{} request: {}", PROVIDER_ID, url);

        let response = self
            .client
            .get(url)
            .query(&[("format", "json")])
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(status_error(status, &body, not_found));
        }

        let text = response.text().await?;
        Ok(serde_json::from_str(&text)?)
    }
}

/// Map a non-2xx status to the error taxonomy.
fn status_error(status: StatusCode, body: &str, not_found: NotFound) -> MarketDataError {
    match status {
        StatusCode::NOT_FOUND => not_found.into_error(),
        StatusCode::BAD_REQUEST => {
            let detail = body.trim();
            if detail.is_empty() {
                MarketDataError::InvalidArgument("request rejected by source".to_string())
            } else {
                MarketDataError::InvalidArgument(format!("request rejected by source: {}", detail))
            }
        }
        _ => MarketDataError::SourceUnavailable(format!("HTTP error: {}", status)),
    }
}

fn parse_decimal(value: f64) -> Result<Decimal, MarketDataError> {
    Decimal::from_f64(value).ok_or_else(|| {
        MarketDataError::SourceUnavailable(format!("Malformed response: invalid price {}", value))
    })
}

fn parse_wire_date(value: &str) -> Result<DateKey, MarketDataError> {
    DateKey::parse(value).map_err(|_| {
        MarketDataError::SourceUnavailable(format!("Malformed response: invalid date {:?}", value))
    })
}

/// Build the reference table. Entries with unusable codes are skipped.
fn table_from_response(tables: Vec<NbpTable>) -> Result<CurrencyTable, MarketDataError> {
    let table = tables.into_iter().next().ok_or_else(|| {
        MarketDataError::SourceUnavailable("Malformed response: empty table list".to_string())
    })?;

    let mut currencies = CurrencyTable::new();
    currencies.table_no = table.no;
    currencies.effective_date = table
        .effective_date
        .as_deref()
        .and_then(|d| DateKey::parse(d).ok());

    for rate in table.rates {
        match CurrencyCode::parse(&rate.code) {
            Ok(code) => {
                currencies.insert(CurrencyListing {
                    code,
                    display_name: rate.currency,
                });
            }
            Err(_) => warn!("Skipping table entry with invalid code {:?}", rate.code),
        }
    }

    Ok(currencies)
}

/// Convert a rate series into quotations, oldest first.
fn quotations_from_series(
    requested: &CurrencyCode,
    series: NbpRateSeries,
) -> Result<Vec<Quotation>, MarketDataError> {
    if series.code != requested.as_str() {
        return Err(MarketDataError::SourceUnavailable(format!(
            "Malformed response: expected {} but got {}",
            requested, series.code
        )));
    }

    let mut quotations = series
        .rates
        .into_iter()
        .map(|rate| {
            let quotation = Quotation::new(
                requested.clone(),
                parse_wire_date(&rate.effective_date)?,
                parse_decimal(rate.mid)?,
            );
            Ok(match rate.no {
                Some(no) => quotation.with_table_no(no),
                None => quotation,
            })
        })
        .collect::<Result<Vec<_>, MarketDataError>>()?;

    quotations.sort_by_key(|q| q.effective_date);
    Ok(quotations)
}

fn gold_from_response(prices: Vec<NbpGoldPrice>) -> Result<Vec<GoldPricePoint>, MarketDataError> {
    let mut points = prices
        .into_iter()
        .map(|p| {
            Ok(GoldPricePoint {
                date: parse_wire_date(&p.data)?,
                price_per_gram: parse_decimal(p.cena)?,
            })
        })
        .collect::<Result<Vec<_>, MarketDataError>>()?;

    points.sort_by_key(|p| p.date);
    Ok(points)
}

#[async_trait]
impl RateSource for NbpProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn fetch_currency_table(&self) -> Result<CurrencyTable, MarketDataError> {
        let tables: Vec<NbpTable> = self.fetch(&self.table_url(), NotFound::Unavailable).await?;
        let table = table_from_response(tables)?;
        let _ = self.known_currencies.set(table.clone());
        Ok(table)
    }

    async fn fetch_rate_for_date(
        &self,
        currency: &CurrencyCode,
        date: DateKey,
    ) -> Result<Quotation, MarketDataError> {
        self.ensure_known(currency)?;

        let series: NbpRateSeries = match self
            .fetch(
                &self.rate_for_date_url(currency, date),
                NotFound::NoQuotation(currency.clone(), date),
            )
            .await
        {
            Ok(series) => series,
            Err(missing @ MarketDataError::NoQuotation { .. }) => {
                return Err(self.classify_missing_day(currency, missing).await);
            }
            Err(err) => return Err(err),
        };

        quotations_from_series(currency, series)?
            .into_iter()
            .next_back()
            .ok_or_else(|| {
                MarketDataError::SourceUnavailable(format!(
                    "Malformed response: no rates for {} on {}",
                    currency, date
                ))
            })
    }

    async fn fetch_recent_rates(
        &self,
        currency: &CurrencyCode,
        count: RecentCount,
    ) -> Result<Vec<Quotation>, MarketDataError> {
        self.ensure_known(currency)?;

        let series: NbpRateSeries = self
            .fetch(
                &self.recent_rates_url(currency, count),
                NotFound::UnknownCurrency(currency.clone()),
            )
            .await?;

        quotations_from_series(currency, series)
    }

    async fn fetch_recent_gold_prices(
        &self,
        count: RecentCount,
    ) -> Result<Vec<GoldPricePoint>, MarketDataError> {
        let prices: Vec<NbpGoldPrice> = self.fetch(&self.gold_url(count), NotFound::Unavailable).await?;
        gold_from_response(prices)
    }
}
