//! Text rendering of lookup results.

use std::fmt::Write;

use kursnbp_market_data::{
    CurrencyListing, CurrencyTable, GoldPricePoint, HistorySeries, ResolutionResult,
};
use num_traits::ToPrimitive;
use rust_decimal::Decimal;

/// Widest bar of the history chart.
const CHART_WIDTH: u32 = 40;

pub fn currencies(table: &CurrencyTable) -> String {
    let mut out = String::new();
    if let (Some(no), Some(date)) = (&table.table_no, table.effective_date) {
        let _ = writeln!(out, "Table {} of {}", no, date);
    }
    for listing in table.iter() {
        let _ = writeln!(out, "{}  {}", listing.code, listing.display_name);
    }
    out
}

pub fn rate(result: &ResolutionResult, listing: Option<&CurrencyListing>) -> String {
    let quotation = result.quotation();
    let mut out = String::new();

    match listing {
        Some(listing) => {
            let _ = writeln!(
                out,
                "Currency:       {} ({})",
                quotation.currency, listing.display_name
            );
        }
        None => {
            let _ = writeln!(out, "Currency:       {}", quotation.currency);
        }
    }
    let _ = writeln!(out, "Effective date: {}", quotation.effective_date);
    let _ = writeln!(out, "Mid rate:       {} PLN", quotation.mid_rate);

    if result.was_fallback() {
        let _ = writeln!(
            out,
            "* {} had no quotation, showing the rate from {} ({} day(s) earlier)",
            result.requested_date(),
            quotation.effective_date,
            result.days_back()
        );
    }
    out
}

pub fn history(series: &HistorySeries) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} mid rates, last {} quotations", series.currency, series.len());

    let Some((lo, hi)) = series.price_range() else {
        return out;
    };
    for point in series.points() {
        let bar = "#".repeat(bar_width(point.price, lo, hi) as usize);
        let _ = writeln!(out, "{}  {:>8}  {}", point.date, point.price, bar);
    }
    out
}

pub fn gold(prices: &[GoldPricePoint]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Date        Price (1 g)");
    for point in prices {
        let _ = writeln!(out, "{}  {} PLN", point.date, point.price_per_gram);
    }
    out
}

/// Bar length in `1..=CHART_WIDTH`, linear between the series' low and high.
fn bar_width(price: Decimal, lo: Decimal, hi: Decimal) -> u32 {
    if hi <= lo {
        return CHART_WIDTH / 2;
    }
    let span = Decimal::from(CHART_WIDTH - 1);
    let scaled = ((price - lo) / (hi - lo) * span).round();
    1 + scaled.to_u32().unwrap_or(0).min(CHART_WIDTH - 1)
}
