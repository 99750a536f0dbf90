//! In-memory rate source for unit tests.

use std::collections::{BTreeMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::errors::MarketDataError;
use crate::models::{
    CurrencyCode, CurrencyListing, CurrencyTable, DateKey, GoldPricePoint, Quotation, RecentCount,
};
use crate::provider::RateSource;

/// A recorded call against the fake.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Call {
    Table,
    RateForDate(String, DateKey),
    RecentRates(String, u32),
    RecentGold(u32),
}

#[derive(Default)]
pub struct MockRateSource {
    rates: BTreeMap<(CurrencyCode, DateKey), Decimal>,
    gold: Vec<GoldPricePoint>,
    known: HashSet<CurrencyCode>,
    unavailable: bool,
    hang: bool,
    reverse_recent: bool,
    calls: Mutex<Vec<Call>>,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

pub fn code(s: &str) -> CurrencyCode {
    CurrencyCode::parse(s).unwrap()
}

pub fn day(s: &str) -> DateKey {
    DateKey::parse(s).unwrap()
}

impl MockRateSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rate(mut self, currency: &str, date: &str, mid: Decimal) -> Self {
        self.known.insert(code(currency));
        self.rates.insert((code(currency), day(date)), mid);
        self
    }

    pub fn with_currency(mut self, currency: &str) -> Self {
        self.known.insert(code(currency));
        self
    }

    pub fn with_gold(mut self, date: &str, price: Decimal) -> Self {
        self.gold.push(GoldPricePoint {
            date: day(date),
            price_per_gram: price,
        });
        self
    }

    /// Every call fails with `SourceUnavailable`.
    pub fn unavailable(mut self) -> Self {
        self.unavailable = true;
        self
    }

    /// Every call stays pending forever.
    pub fn hanging(mut self) -> Self {
        self.hang = true;
        self
    }

    /// Return recent rates newest first, as a misbehaving source might.
    pub fn reverse_recent(mut self) -> Self {
        self.reverse_recent = true;
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Highest number of calls that were in progress at the same time.
    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }

    async fn enter(&self, call: Call) -> Result<(), MarketDataError> {
        self.calls.lock().unwrap().push(call);
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);

        if self.hang {
            futures::future::pending::<()>().await;
        }
        tokio::task::yield_now().await;
        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        if self.unavailable {
            return Err(MarketDataError::SourceUnavailable(
                "HTTP error: 503 Service Unavailable".to_string(),
            ));
        }
        Ok(())
    }

    fn ensure_known(&self, currency: &CurrencyCode) -> Result<(), MarketDataError> {
        if self.known.contains(currency) {
            Ok(())
        } else {
            Err(MarketDataError::UnknownCurrency(currency.clone()))
        }
    }
}

#[async_trait]
impl RateSource for MockRateSource {
    fn id(&self) -> &'static str {
        "MOCK"
    }

    async fn fetch_currency_table(&self) -> Result<CurrencyTable, MarketDataError> {
        self.enter(Call::Table).await?;
        Ok(CurrencyTable::from_listings(self.known.iter().map(|c| {
            CurrencyListing {
                code: c.clone(),
                display_name: c.to_string(),
            }
        })))
    }

    async fn fetch_rate_for_date(
        &self,
        currency: &CurrencyCode,
        date: DateKey,
    ) -> Result<Quotation, MarketDataError> {
        self.enter(Call::RateForDate(currency.to_string(), date)).await?;
        self.ensure_known(currency)?;
        self.rates
            .get(&(currency.clone(), date))
            .map(|mid| Quotation::new(currency.clone(), date, *mid))
            .ok_or_else(|| MarketDataError::NoQuotation {
                currency: currency.clone(),
                date,
            })
    }

    async fn fetch_recent_rates(
        &self,
        currency: &CurrencyCode,
        count: RecentCount,
    ) -> Result<Vec<Quotation>, MarketDataError> {
        self.enter(Call::RecentRates(currency.to_string(), count.get()))
            .await?;
        self.ensure_known(currency)?;

        let all: Vec<Quotation> = self
            .rates
            .iter()
            .filter(|((c, _), _)| c == currency)
            .map(|((c, d), mid)| Quotation::new(c.clone(), *d, *mid))
            .collect();
        let skip = all.len().saturating_sub(count.get() as usize);
        let mut recent: Vec<Quotation> = all.into_iter().skip(skip).collect();
        if self.reverse_recent {
            recent.reverse();
        }
        Ok(recent)
    }

    async fn fetch_recent_gold_prices(
        &self,
        count: RecentCount,
    ) -> Result<Vec<GoldPricePoint>, MarketDataError> {
        self.enter(Call::RecentGold(count.get())).await?;
        let skip = self.gold.len().saturating_sub(count.get() as usize);
        Ok(self.gold.iter().skip(skip).copied().collect())
    }
}
