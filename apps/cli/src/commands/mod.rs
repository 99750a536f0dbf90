mod currencies;
mod gold;
mod history;
mod rate;

use std::sync::Arc;

use kursnbp_market_data::{CurrencyCode, CurrencyTable, NbpProvider, RateSource};
use serde::Serialize;

use crate::cli::{Cli, Command};
use crate::config::Config;
use crate::error::CliError;

/// Everything a command needs: the source and the resolution policy.
pub struct Session {
    provider: NbpProvider,
    config: Config,
}

impl Session {
    pub fn new(config: Config) -> Result<Self, CliError> {
        let provider = NbpProvider::new(config.nbp.clone())?;
        Ok(Self { provider, config })
    }

    /// Load the reference table once and validate `code` against it.
    /// Returns a source that rejects unknown codes without a request.
    async fn checked_source(
        &self,
        code: &str,
    ) -> Result<(Arc<dyn RateSource>, CurrencyTable, CurrencyCode), CliError> {
        let currency = CurrencyCode::parse(code)?;
        let table = self.provider.fetch_currency_table().await?;
        let source = self.provider.clone().with_currency_table(table.clone());
        Ok((Arc::new(source), table, currency))
    }
}

pub async fn run(cli: Cli, config: Config) -> Result<(), CliError> {
    let session = Session::new(config)?;
    let output = match &cli.command {
        Command::Currencies => currencies::run(&session, cli.json).await?,
        Command::Rate(args) => rate::run(&session, args, cli.json).await?,
        Command::History(args) => history::run(&session, args, cli.json).await?,
        Command::Gold(args) => gold::run(&session, args, cli.json).await?,
    };
    print!("{}", output);
    Ok(())
}

fn to_json<T: Serialize>(value: &T) -> Result<String, CliError> {
    Ok(format!("{}\n", serde_json::to_string_pretty(value)?))
}
