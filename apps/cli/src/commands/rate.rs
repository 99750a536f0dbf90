use kursnbp_market_data::{DateKey, TradingDayResolver};
use tracing::info;

use crate::cli::RateArgs;
use crate::error::CliError;
use crate::render;

use super::{to_json, Session};

pub async fn run(session: &Session, args: &RateArgs, json: bool) -> Result<String, CliError> {
    let date = match &args.date {
        Some(raw) => DateKey::parse(raw)?,
        None => DateKey::today(),
    };
    let (source, table, currency) = session.checked_source(&args.currency).await?;

    let result = TradingDayResolver::new(source)
        .with_policy(session.config.search)
        .resolve(&currency, date)
        .await?;

    if result.was_fallback() {
        info!(
            "{} resolved to {} for requested {}",
            currency,
            result.quotation().effective_date,
            date
        );
    }

    if json {
        return to_json(&result);
    }
    Ok(render::rate(&result, table.get(&currency)))
}
