//! Telegram Bot API transport.
//!
//! Long polling via `getUpdates`, replies via `sendMessage`. The polling
//! loop logs transport errors and keeps going; a failure while handling
//! one command never takes the process down.

pub mod commands;

use std::time::Duration;

use reqwest::Client;
use serde_json::json;

use crate::client::ScopusClient;
use crate::config::Config;
use crate::error::{ClientError, ClientResult};
use crate::models::{Update, UpdatesResponse};

/// Pause before re-polling after a transport error.
const POLL_RETRY_DELAY: Duration = Duration::from_secs(5);

/// Telegram Bot API client.
#[derive(Clone)]
pub struct TelegramBot {
    /// Shared HTTP client.
    client: Client,

    /// Bot token.
    token: String,

    /// Bot API base URL.
    base_url: String,

    /// Long-poll timeout in seconds.
    poll_timeout_secs: u64,
}

impl TelegramBot {
    /// Create a new bot client from the configuration.
    ///
    /// # Errors
    ///
    /// Returns error if HTTP client initialization fails.
    pub fn new(config: &Config) -> ClientResult<Self> {
        // Long polls hold the connection open for poll_timeout_secs, so the
        // request timeout must exceed it.
        let client = Client::builder()
            .timeout(config.request_timeout + Duration::from_secs(config.poll_timeout_secs))
            .connect_timeout(config.connect_timeout)
            .build()?;

        Ok(Self {
            client,
            token: config.telegram_token.clone(),
            base_url: config.telegram_url.clone(),
            poll_timeout_secs: config.poll_timeout_secs,
        })
    }

    /// Fetch pending updates, long-polling from the given offset.
    ///
    /// # Errors
    ///
    /// Returns error on transport failure or a non-2xx response.
    pub async fn get_updates(&self, offset: Option<i64>) -> ClientResult<Vec<Update>> {
        let mut body = json!({ "timeout": self.poll_timeout_secs });
        if let Some(offset) = offset {
            body["offset"] = json!(offset);
        }

        let response =
            self.client.post(self.method_url("getUpdates")).json(&body).send().await?;
        let response = handle_response(response).await?;

        let body: UpdatesResponse = response.json().await?;
        Ok(body.result)
    }

    /// Send a plain-text message to a chat.
    ///
    /// # Errors
    ///
    /// Returns error on transport failure or a non-2xx response.
    pub async fn send_message(&self, chat_id: i64, text: &str) -> ClientResult<()> {
        self.send(json!({ "chat_id": chat_id, "text": text })).await
    }

    /// Send a reply to a specific message.
    ///
    /// # Errors
    ///
    /// Returns error on transport failure or a non-2xx response.
    pub async fn reply_to(&self, chat_id: i64, message_id: i64, text: &str) -> ClientResult<()> {
        self.send(json!({
            "chat_id": chat_id,
            "text": text,
            "reply_to_message_id": message_id,
        }))
        .await
    }

    async fn send(&self, body: serde_json::Value) -> ClientResult<()> {
        let response =
            self.client.post(self.method_url("sendMessage")).json(&body).send().await?;
        handle_response(response).await?;
        Ok(())
    }

    fn method_url(&self, method: &str) -> String {
        format!("{}/bot{}/{}", self.base_url, self.token, method)
    }
}

impl std::fmt::Debug for TelegramBot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelegramBot").field("base_url", &self.base_url).finish()
    }
}

async fn handle_response(response: reqwest::Response) -> ClientResult<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let text = response.text().await.unwrap_or_default();
    Err(ClientError::status(status.as_u16(), text))
}

/// Run the polling loop until the process is stopped.
///
/// Updates within one batch are handled sequentially and independently;
/// the handlers share nothing mutable.
///
/// # Errors
///
/// Currently never returns: poll errors are logged and polling resumes
/// after a short pause.
pub async fn poll_loop(bot: &TelegramBot, scopus: &ScopusClient) -> ClientResult<()> {
    let mut offset: Option<i64> = None;

    loop {
        let updates = match bot.get_updates(offset).await {
            Ok(updates) => updates,
            Err(err) => {
                tracing::warn!(error = %err, "getUpdates failed, retrying");
                tokio::time::sleep(POLL_RETRY_DELAY).await;
                continue;
            }
        };

        for update in updates {
            offset = Some(update.update_id + 1);

            let Some(message) = update.message else { continue };
            if let Err(err) = commands::handle_message(bot, scopus, &message).await {
                tracing::error!(
                    error = %err,
                    chat_id = message.chat.id,
                    "failed to handle message"
                );
            }
        }
    }
}
