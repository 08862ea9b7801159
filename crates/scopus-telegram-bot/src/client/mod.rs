//! Scopus search API client.
//!
//! One synchronous round trip per call: no caching, no retries, no
//! backoff. A failed request surfaces as a single [`ClientError`].

use reqwest::Client;

use crate::config::{api, Config};
use crate::error::{ClientError, ClientResult};
use crate::models::{Article, QuotaStatus, SearchResponse};

/// Scopus API client.
#[derive(Clone)]
pub struct ScopusClient {
    /// Shared HTTP client.
    client: Client,

    /// Elsevier API key.
    api_key: String,

    /// Search endpoint base URL.
    search_url: String,
}

impl ScopusClient {
    /// Create a new client from the bot configuration.
    ///
    /// # Errors
    ///
    /// Returns error if HTTP client initialization fails.
    pub fn new(config: &Config) -> ClientResult<Self> {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(reqwest::header::ACCEPT, reqwest::header::HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .default_headers(headers)
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .gzip(true)
            .build()?;

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            search_url: config.search_url.clone(),
        })
    }

    /// Search for articles matching a phrase over title/abstract/keywords.
    ///
    /// The caller must reject empty queries before calling; this operation
    /// assumes a non-empty trimmed query. Results come back in the API's
    /// relevance order, at most [`api::RESULT_COUNT`] of them.
    ///
    /// # Errors
    ///
    /// Returns error on transport failure or a non-2xx response.
    pub async fn search(&self, query: &str) -> ClientResult<Vec<Article>> {
        let params = [
            ("query", format!("TITLE-ABS-KEY(\"{query}\")")),
            ("count", api::RESULT_COUNT.to_string()),
            ("start", "0".to_string()),
            ("sort", api::SORT_ORDER.to_string()),
            ("apiKey", self.api_key.clone()),
            ("field", api::FIELD_LIST.to_string()),
        ];

        let response =
            self.client.get(&self.search_url).query(&params).send().await.map_err(redact)?;
        let response = handle_response(response).await?;

        let body: SearchResponse = response.json().await.map_err(redact)?;
        Ok(body.into_entries().into_iter().map(Article::from).collect())
    }

    /// Probe the API for its rate-limit quota headers.
    ///
    /// Issues a minimal search (`count=1`, fixed query) purely to read the
    /// `X-RateLimit-*` response headers; the body is discarded.
    ///
    /// # Errors
    ///
    /// Returns error on transport failure or a non-2xx response.
    pub async fn quota_status(&self) -> ClientResult<QuotaStatus> {
        let params = [("query", "test"), ("count", "1")];

        let response = self
            .client
            .get(&self.search_url)
            .header("X-ELS-APIKey", &self.api_key)
            .query(&params)
            .send()
            .await
            .map_err(redact)?;
        let response = handle_response(response).await?;

        Ok(QuotaStatus::from_headers(response.headers()))
    }
}

/// Drop the request URL from a transport error. The search URL carries the
/// API key in its query string, and error text is echoed into chat replies.
fn redact(err: reqwest::Error) -> ClientError {
    ClientError::Http(err.without_url())
}

/// Map a non-2xx response to an error carrying its status and body text.
async fn handle_response(response: reqwest::Response) -> ClientResult<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let text = response.text().await.unwrap_or_default();
    Err(ClientError::status(status.as_u16(), text))
}

impl std::fmt::Debug for ScopusClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScopusClient").field("search_url", &self.search_url).finish()
    }
}
