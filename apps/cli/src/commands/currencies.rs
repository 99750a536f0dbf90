use kursnbp_market_data::RateSource;

use crate::error::CliError;
use crate::render;

use super::{to_json, Session};

pub async fn run(session: &Session, json: bool) -> Result<String, CliError> {
    let table = session.provider.fetch_currency_table().await?;
    if json {
        let listings: Vec<_> = table.iter().collect();
        return to_json(&listings);
    }
    Ok(render::currencies(&table))
}
