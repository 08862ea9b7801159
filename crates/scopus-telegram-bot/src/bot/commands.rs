//! Command parsing and handlers.
//!
//! Dispatch is an explicit parse to a [`Command`] enum handled by a
//! match: the command name is the first whitespace-separated token,
//! compared case-insensitively, and the argument is trimmed.

use crate::client::ScopusClient;
use crate::error::ClientResult;
use crate::formatters;
use crate::models::Message;

use super::TelegramBot;

/// A recognized bot command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `/scopus <query>` — search for articles. The argument may be empty.
    Search(String),

    /// `/quote` — report API quota status.
    Quota,
}

impl Command {
    /// Parse a message text into a command. Unknown commands and plain
    /// text yield `None`.
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        let trimmed = text.trim();
        let name = trimmed.split_whitespace().next()?;

        if name.eq_ignore_ascii_case("/scopus") {
            let argument = trimmed[name.len()..].trim();
            Some(Self::Search(argument.to_string()))
        } else if name.eq_ignore_ascii_case("/quote") {
            Some(Self::Quota)
        } else {
            None
        }
    }
}

/// Dispatch one inbound message to its handler. Messages that are not
/// recognized commands are ignored.
///
/// # Errors
///
/// Returns error only when sending a reply fails; upstream search
/// failures are turned into user-visible error replies instead.
pub async fn handle_message(
    bot: &TelegramBot,
    scopus: &ScopusClient,
    message: &Message,
) -> ClientResult<()> {
    let Some(text) = message.text.as_deref() else {
        return Ok(());
    };

    match Command::parse(text) {
        Some(Command::Search(query)) => {
            handle_search(bot, scopus, message.chat.id, message.message_id, &query).await
        }
        Some(Command::Quota) => {
            handle_quota(bot, scopus, message.chat.id, message.message_id).await
        }
        None => Ok(()),
    }
}

/// Handle `/scopus <query>`: acknowledge, search, reply with the result
/// list, the nothing-found notice, or an error notice.
///
/// An empty query short-circuits to the usage hint with no network call.
async fn handle_search(
    bot: &TelegramBot,
    scopus: &ScopusClient,
    chat_id: i64,
    message_id: i64,
    query: &str,
) -> ClientResult<()> {
    if query.is_empty() {
        return bot.reply_to(chat_id, message_id, formatters::USAGE_HINT).await;
    }

    tracing::info!(chat_id, query, "handling search command");
    bot.reply_to(chat_id, message_id, &formatters::search_ack(query)).await?;

    let reply = match scopus.search(query).await {
        Ok(articles) => formatters::format_search_reply(query, &articles),
        Err(err) => {
            tracing::warn!(error = %err, query, "search request failed");
            formatters::search_error(&err.to_string())
        }
    };

    bot.send_message(chat_id, &reply).await
}

/// Handle `/quote`: acknowledge, probe the quota headers, reply with the
/// status report or an error notice.
async fn handle_quota(
    bot: &TelegramBot,
    scopus: &ScopusClient,
    chat_id: i64,
    message_id: i64,
) -> ClientResult<()> {
    tracing::info!(chat_id, "handling quota command");
    bot.reply_to(chat_id, message_id, formatters::QUOTA_ACK).await?;

    let reply = match scopus.quota_status().await {
        Ok(quota) => formatters::format_quota_reply(&quota),
        Err(err) => {
            tracing::warn!(error = %err, "quota probe failed");
            formatters::quota_error(&err.to_string())
        }
    };

    bot.send_message(chat_id, &reply).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_search_with_argument() {
        assert_eq!(
            Command::parse("/scopus methane pyrolysis"),
            Some(Command::Search("methane pyrolysis".to_string()))
        );
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(
            Command::parse("/SCOPUS methane"),
            Some(Command::Search("methane".to_string()))
        );
        assert_eq!(Command::parse("/Quote"), Some(Command::Quota));
    }

    #[test]
    fn test_parse_trims_argument() {
        assert_eq!(
            Command::parse("  /scopus   methane  "),
            Some(Command::Search("methane".to_string()))
        );
    }

    #[test]
    fn test_parse_empty_argument() {
        assert_eq!(Command::parse("/scopus"), Some(Command::Search(String::new())));
        assert_eq!(Command::parse("/scopus   "), Some(Command::Search(String::new())));
    }

    #[test]
    fn test_parse_ignores_unknown_input() {
        assert_eq!(Command::parse("/help"), None);
        assert_eq!(Command::parse("hello there"), None);
        assert_eq!(Command::parse(""), None);
        assert_eq!(Command::parse("/scopusx query"), None);
    }
}
