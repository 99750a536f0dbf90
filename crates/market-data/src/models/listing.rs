use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::types::{CurrencyCode, DateKey};

/// One entry of the currency reference table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyListing {
    pub code: CurrencyCode,
    pub display_name: String,
}

/// The set of currencies the source publishes rates for, keyed by code.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyTable {
    /// Table number (e.g. "004/A/NBP/2024")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_no: Option<String>,

    /// Day the table was published
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effective_date: Option<DateKey>,

    listings: BTreeMap<CurrencyCode, CurrencyListing>,
}

impl CurrencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from listings. The first listing for a code wins.
    pub fn from_listings(listings: impl IntoIterator<Item = CurrencyListing>) -> Self {
        let mut table = Self::new();
        for listing in listings {
            table.insert(listing);
        }
        table
    }

    /// Insert a listing unless its code is already present.
    /// Returns true if the listing was added.
    pub fn insert(&mut self, listing: CurrencyListing) -> bool {
        if self.listings.contains_key(&listing.code) {
            return false;
        }
        self.listings.insert(listing.code.clone(), listing);
        true
    }

    pub fn contains(&self, code: &CurrencyCode) -> bool {
        self.listings.contains_key(code)
    }

    pub fn get(&self, code: &CurrencyCode) -> Option<&CurrencyListing> {
        self.listings.get(code)
    }

    /// Listings ordered by code.
    pub fn iter(&self) -> impl Iterator<Item = &CurrencyListing> {
        self.listings.values()
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }
}
