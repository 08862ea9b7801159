//! Configuration for the Scopus Telegram bot.

use std::time::Duration;

use crate::error::ConfigError;

/// API configuration constants.
pub mod api {
    use std::time::Duration;

    /// Base URL for the Scopus search endpoint.
    pub const SEARCH_URL: &str = "https://api.elsevier.com/content/search/scopus";

    /// Base URL for the Telegram Bot API.
    pub const TELEGRAM_URL: &str = "https://api.telegram.org";

    /// Number of results requested per search.
    pub const RESULT_COUNT: u32 = 5;

    /// Sort order requested from the search API.
    pub const SORT_ORDER: &str = "relevancy";

    /// Restricted response field list for search requests.
    pub const FIELD_LIST: &str =
        "dc:title,prism:doi,prism:publicationName,prism:coverDate,dc:creator";

    /// Request timeout.
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

    /// Connection timeout.
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Long-poll timeout passed to Telegram `getUpdates`, in seconds.
    pub const POLL_TIMEOUT_SECS: u64 = 30;
}

/// Bot configuration, constructed once at startup and passed by reference
/// into both clients. No ambient globals.
#[derive(Debug, Clone)]
pub struct Config {
    /// Elsevier Scopus API key.
    pub api_key: String,

    /// Telegram bot token.
    pub telegram_token: String,

    /// Base URL for the Scopus search endpoint (overridable for tests).
    pub search_url: String,

    /// Base URL for the Telegram Bot API (overridable for tests).
    pub telegram_url: String,

    /// Request timeout.
    pub request_timeout: Duration,

    /// Connection timeout.
    pub connect_timeout: Duration,

    /// Long-poll timeout in seconds.
    pub poll_timeout_secs: u64,
}

impl Config {
    /// Create a configuration from the two required secrets.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if either secret is absent or empty.
    pub fn new(
        api_key: Option<String>,
        telegram_token: Option<String>,
    ) -> Result<Self, ConfigError> {
        let api_key = api_key.filter(|k| !k.is_empty()).ok_or(ConfigError::MissingApiKey)?;
        let telegram_token =
            telegram_token.filter(|t| !t.is_empty()).ok_or(ConfigError::MissingToken)?;

        Ok(Self {
            api_key,
            telegram_token,
            search_url: api::SEARCH_URL.to_string(),
            telegram_url: api::TELEGRAM_URL.to_string(),
            request_timeout: api::REQUEST_TIMEOUT,
            connect_timeout: api::CONNECT_TIMEOUT,
            poll_timeout_secs: api::POLL_TIMEOUT_SECS,
        })
    }

    /// Create configuration from environment variables (`SCOPUS_API_KEY`,
    /// `TELEGRAM_TOKEN`).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if either variable is missing.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::new(std::env::var("SCOPUS_API_KEY").ok(), std::env::var("TELEGRAM_TOKEN").ok())
    }

    /// Create a test configuration pointing both APIs at a mock server.
    #[must_use]
    pub fn for_testing(base_url: &str) -> Self {
        Self {
            api_key: "test-key".to_string(),
            telegram_token: "test-token".to_string(),
            search_url: format!("{base_url}/content/search/scopus"),
            telegram_url: base_url.to_string(),
            request_timeout: Duration::from_secs(5),
            connect_timeout: Duration::from_secs(2),
            poll_timeout_secs: 0, // No long-poll delay in tests
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigError;

    #[test]
    fn test_config_requires_api_key() {
        let err = Config::new(None, Some("token".to_string())).unwrap_err();
        assert!(matches!(err, ConfigError::MissingApiKey));
    }

    #[test]
    fn test_config_requires_token() {
        let err = Config::new(Some("key".to_string()), None).unwrap_err();
        assert!(matches!(err, ConfigError::MissingToken));
    }

    #[test]
    fn test_config_rejects_empty_secrets() {
        let err = Config::new(Some(String::new()), Some("token".to_string())).unwrap_err();
        assert!(matches!(err, ConfigError::MissingApiKey));
    }

    #[test]
    fn test_config_defaults_to_production_urls() {
        let config = Config::new(Some("key".to_string()), Some("token".to_string())).unwrap();
        assert_eq!(config.search_url, api::SEARCH_URL);
        assert_eq!(config.telegram_url, api::TELEGRAM_URL);
    }

    #[test]
    fn test_for_testing_points_at_mock() {
        let config = Config::for_testing("http://127.0.0.1:9999");
        assert!(config.search_url.starts_with("http://127.0.0.1:9999"));
        assert_eq!(config.telegram_url, "http://127.0.0.1:9999");
    }
}
