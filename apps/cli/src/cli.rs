use clap::{Args, Parser, Subcommand};
use kursnbp_market_data::{DEFAULT_GOLD_POINTS, DEFAULT_HISTORY_POINTS};

/// NBP exchange rates and gold prices.
#[derive(Debug, Parser)]
#[command(name = "kursnbp", version, about)]
pub struct Cli {
    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List currencies with published mid rates
    Currencies,
    /// Mid rate for a currency on a day (earlier trading day if none was published)
    Rate(RateArgs),
    /// Most recent mid rates of a currency as a text chart
    History(HistoryArgs),
    /// Most recent gold prices per gram
    Gold(GoldArgs),
}

#[derive(Debug, Args)]
pub struct RateArgs {
    /// Currency code, e.g. USD
    #[arg(short, long, default_value = "USD")]
    pub currency: String,

    /// Day as YYYY-MM-DD, defaults to today
    #[arg(short, long)]
    pub date: Option<String>,
}

#[derive(Debug, Args)]
pub struct HistoryArgs {
    /// Currency code, e.g. USD
    #[arg(short, long, default_value = "USD")]
    pub currency: String,

    /// Number of most recent quotations
    #[arg(short = 'n', long, default_value_t = DEFAULT_HISTORY_POINTS, allow_negative_numbers = true)]
    pub count: i64,
}

#[derive(Debug, Args)]
pub struct GoldArgs {
    /// Number of most recent prices
    #[arg(short = 'n', long, default_value_t = DEFAULT_GOLD_POINTS, allow_negative_numbers = true)]
    pub count: i64,
}
