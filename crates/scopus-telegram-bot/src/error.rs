//! Error types for the Scopus Telegram bot.
//!
//! Uses `thiserror` for structured error handling with automatic `From`
//! implementations.

/// Errors from the HTTP client layer (Scopus and Telegram alike).
///
/// A failed request is a single terminal condition: no retry, no backoff.
/// Rate-limit responses are not special-cased beyond carrying their status
/// and body text.
#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    /// HTTP transport error (connection, DNS, TLS, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx response from the upstream API
    #[error("Unexpected status {status}: {message}")]
    UnexpectedStatus {
        /// HTTP status code
        status: u16,
        /// Response body or message
        message: String,
    },

    /// JSON parsing error
    #[error("Failed to parse response: {0}")]
    Parse(#[from] serde_json::Error),
}

impl ClientError {
    /// Create an unexpected-status error.
    #[must_use]
    pub fn status(status: u16, message: impl Into<String>) -> Self {
        Self::UnexpectedStatus { status, message: message.into() }
    }
}

/// Startup configuration errors. Any of these is fatal before polling
/// begins.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// Scopus API key not provided via flag, environment, or `.env`
    #[error("SCOPUS_API_KEY is not set (flag --api-key, environment, or .env)")]
    MissingApiKey,

    /// Telegram bot token not provided via flag, environment, or `.env`
    #[error("TELEGRAM_TOKEN is not set (flag --telegram-token, environment, or .env)")]
    MissingToken,
}

/// Result type alias for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_display_carries_body() {
        let err = ClientError::status(503, "upstream unavailable");
        let text = err.to_string();
        assert!(text.contains("503"));
        assert!(text.contains("upstream unavailable"));
    }

    #[test]
    fn test_config_error_names_the_variable() {
        assert!(ConfigError::MissingApiKey.to_string().contains("SCOPUS_API_KEY"));
        assert!(ConfigError::MissingToken.to_string().contains("TELEGRAM_TOKEN"));
    }
}
