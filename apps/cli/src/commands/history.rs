use kursnbp_market_data::{HistoryAggregator, RecentCount};

use crate::cli::HistoryArgs;
use crate::error::CliError;
use crate::render;

use super::{to_json, Session};

pub async fn run(session: &Session, args: &HistoryArgs, json: bool) -> Result<String, CliError> {
    let count = RecentCount::new(args.count)?;
    let (source, _, currency) = session.checked_source(&args.currency).await?;

    let series = HistoryAggregator::new(source)
        .build_history(&currency, i64::from(count.get()))
        .await?;

    if json {
        return to_json(&series);
    }
    Ok(render::history(&series))
}
