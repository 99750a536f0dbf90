//! Connection settings for the NBP provider.

use std::time::Duration;

/// Public NBP API root.
pub const DEFAULT_BASE_URL: &str = "https://api.nbp.pl/api";

/// Default per-request timeout.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Where and how to reach the source.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NbpConfig {
    /// API root without a trailing slash.
    pub base_url: String,

    /// Bound on each individual request. Expiry maps to `SourceUnavailable`.
    pub request_timeout: Duration,
}

impl NbpConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }
}

impl Default for NbpConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = NbpConfig::default();
        assert_eq!(config.base_url, "https://api.nbp.pl/api");
        assert_eq!(config.request_timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let config = NbpConfig::default().with_base_url("http://localhost:8080/api/");
        assert_eq!(config.base_url, "http://localhost:8080/api");
    }
}
