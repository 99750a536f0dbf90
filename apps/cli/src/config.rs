use std::time::Duration;

use anyhow::Context;
use kursnbp_market_data::{NbpConfig, SearchPolicy, DEFAULT_MAX_DAYS_BACK};

pub struct Config {
    pub nbp: NbpConfig,
    pub search: SearchPolicy,
    pub log_format: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let mut nbp = NbpConfig::default();
        if let Some(base_url) = lookup("KURSNBP_BASE_URL") {
            nbp = nbp.with_base_url(base_url);
        }

        let timeout_ms: u64 = lookup("KURSNBP_REQUEST_TIMEOUT_MS")
            .unwrap_or_else(|| "10000".into())
            .parse()
            .context("Invalid KURSNBP_REQUEST_TIMEOUT_MS")?;
        nbp = nbp.with_request_timeout(Duration::from_millis(timeout_ms));

        let max_days_back: u32 = match lookup("KURSNBP_MAX_DAYS_BACK") {
            Some(raw) => raw.parse().context("Invalid KURSNBP_MAX_DAYS_BACK")?,
            None => DEFAULT_MAX_DAYS_BACK,
        };

        let log_format = lookup("KURSNBP_LOG_FORMAT").unwrap_or_else(|| "text".to_string());

        Ok(Self {
            nbp,
            search: SearchPolicy::new(max_days_back),
            log_format,
        })
    }
}
