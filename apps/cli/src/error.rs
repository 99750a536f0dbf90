use kursnbp_market_data::MarketDataError;
use thiserror::Error;

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    MarketData(#[from] MarketDataError),

    #[error("configuration error: {0:#}")]
    Config(#[from] anyhow::Error),

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}

impl CliError {
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::MarketData(err) => match err {
                MarketDataError::InvalidArgument(_) | MarketDataError::UnknownCurrency(_) => 2,
                MarketDataError::NoQuotation { .. } | MarketDataError::NoRecentQuotation { .. } => 3,
                MarketDataError::SourceUnavailable(_) => 4,
            },
            Self::Config(_) | Self::Serialization(_) => 10,
        }
    }
}
