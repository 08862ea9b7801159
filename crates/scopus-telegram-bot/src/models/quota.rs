//! API quota status read from rate-limit response headers.

use chrono::DateTime;
use reqwest::header::HeaderMap;

/// Fallback value for absent rate-limit headers.
pub const UNKNOWN: &str = "Unknown";

/// Rate-limit quota snapshot from one probe response. Not persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuotaStatus {
    /// `X-RateLimit-Limit` header value.
    pub limit: String,

    /// `X-RateLimit-Remaining` header value.
    pub remaining: String,

    /// `X-RateLimit-Reset` header value, epoch seconds converted to a
    /// calendar timestamp when digit-only.
    pub reset: String,
}

impl QuotaStatus {
    /// Read the three rate-limit headers, substituting a placeholder for
    /// any that is absent.
    #[must_use]
    pub fn from_headers(headers: &HeaderMap) -> Self {
        Self {
            limit: header_or_unknown(headers, "X-RateLimit-Limit"),
            remaining: header_or_unknown(headers, "X-RateLimit-Remaining"),
            reset: format_reset(&header_or_unknown(headers, "X-RateLimit-Reset")),
        }
    }
}

fn header_or_unknown(headers: &HeaderMap, name: &str) -> String {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map_or_else(|| UNKNOWN.to_string(), ToString::to_string)
}

/// Convert a digit-only reset value from epoch seconds to
/// `YYYY-MM-DD HH:MM:SS` (UTC). Anything else passes through unchanged.
#[must_use]
pub fn format_reset(raw: &str) -> String {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return raw.to_string();
    }

    raw.parse::<i64>()
        .ok()
        .and_then(|secs| DateTime::from_timestamp(secs, 0))
        .map_or_else(|| raw.to_string(), |ts| ts.format("%Y-%m-%d %H:%M:%S").to_string())
}
