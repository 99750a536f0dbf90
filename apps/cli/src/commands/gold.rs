use std::sync::Arc;

use kursnbp_market_data::GoldPriceFetcher;

use crate::cli::GoldArgs;
use crate::error::CliError;
use crate::render;

use super::{to_json, Session};

pub async fn run(session: &Session, args: &GoldArgs, json: bool) -> Result<String, CliError> {
    let fetcher = GoldPriceFetcher::new(Arc::new(session.provider.clone()));
    let prices = fetcher.fetch_recent(args.count).await?;

    if json {
        return to_json(&prices);
    }
    Ok(render::gold(&prices))
}
