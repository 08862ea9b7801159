//! Minimal Telegram Bot API types: just the subset the polling loop and
//! command handlers touch.

use serde::Deserialize;

/// Response envelope of `getUpdates`.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdatesResponse {
    /// Whether the API call succeeded.
    pub ok: bool,

    /// The updates themselves.
    #[serde(default)]
    pub result: Vec<Update>,
}

/// One update delivered by `getUpdates`.
#[derive(Debug, Clone, Deserialize)]
pub struct Update {
    /// Monotonic update identifier, used as the polling offset.
    pub update_id: i64,

    /// The message, when this update carries one.
    #[serde(default)]
    pub message: Option<Message>,
}

/// An inbound chat message.
#[derive(Debug, Clone, Deserialize)]
pub struct Message {
    /// Message identifier within the chat.
    pub message_id: i64,

    /// The chat the message belongs to.
    pub chat: Chat,

    /// Message text; absent for stickers, photos, etc.
    #[serde(default)]
    pub text: Option<String>,
}

/// A Telegram chat.
#[derive(Debug, Clone, Deserialize)]
pub struct Chat {
    /// Unique chat identifier.
    pub id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_deserialize() {
        let json = r#"{
            "ok": true,
            "result": [{
                "update_id": 42,
                "message": {
                    "message_id": 7,
                    "chat": {"id": 1001},
                    "text": "/scopus methane"
                }
            }]
        }"#;

        let response: UpdatesResponse = serde_json::from_str(json).unwrap();
        assert!(response.ok);
        assert_eq!(response.result.len(), 1);

        let update = &response.result[0];
        assert_eq!(update.update_id, 42);
        let message = update.message.as_ref().unwrap();
        assert_eq!(message.chat.id, 1001);
        assert_eq!(message.text.as_deref(), Some("/scopus methane"));
    }

    #[test]
    fn test_update_without_message() {
        let json = r#"{"ok": true, "result": [{"update_id": 43}]}"#;
        let response: UpdatesResponse = serde_json::from_str(json).unwrap();
        assert!(response.result[0].message.is_none());
    }
}
