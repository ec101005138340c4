//! Core types and structures for ragchat
//!
//! This crate provides the data model shared by the gateway, the session
//! store and the front-end, plus the wire shapes of the chat backend.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

// ============================================================================
// Identifiers
// ============================================================================

/// Server-assigned chat identifier
pub type ChatId = i64;

/// Message identifier, unique within its chat
pub type MessageId = i64;

/// Server-assigned document identifier
pub type DocumentId = i64;

// ============================================================================
// Chat Types
// ============================================================================

/// Helper function to deserialize string or null values
pub fn deserialize_string_or_null<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        _ => Ok(String::new()),
    }
}

/// One immutable transcript entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: MessageId,
    #[serde(deserialize_with = "deserialize_string_or_null", default)]
    pub content: String,
    #[serde(default)]
    pub is_user: bool,
    pub created_at: DateTime<Utc>,
}

impl Message {
    /// Message authored by the user
    pub fn user(id: MessageId, content: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            content: content.into(),
            is_user: true,
            created_at,
        }
    }

    /// Message authored by the responder
    pub fn responder(id: MessageId, content: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            content: content.into(),
            is_user: false,
            created_at,
        }
    }

    pub fn author(&self) -> &'static str {
        if self.is_user {
            "user"
        } else {
            "assistant"
        }
    }
}

/// A named, server-identified conversation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chat {
    pub id: ChatId,
    #[serde(deserialize_with = "deserialize_string_or_null", default)]
    pub title: String,
    #[serde(default)]
    pub messages: Vec<Message>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Chat {
    pub fn new(id: ChatId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            messages: Vec::new(),
            created_at: None,
            updated_at: None,
        }
    }

    pub fn with_messages(mut self, messages: Vec<Message>) -> Self {
        self.messages = messages;
        self
    }

    pub fn last_message(&self) -> Option<&Message> {
        self.messages.last()
    }

    /// Highest message id in the transcript, 0 when empty
    pub fn max_message_id(&self) -> MessageId {
        self.messages.iter().map(|m| m.id).max().unwrap_or(0)
    }
}

// ============================================================================
// Document Types
// ============================================================================

/// Reference material the backend retrieves from when answering
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub id: DocumentId,
    pub title: String,
    #[serde(deserialize_with = "deserialize_string_or_null", default)]
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub vectorstore_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub updated_at: Option<DateTime<Utc>>,
}

// ============================================================================
// Wire Types
// ============================================================================

/// Body of `POST /chats/`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateChatRequest {
    pub title: String,
}

/// Body of `POST /chats/{id}/send_message/`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendMessageRequest {
    pub message: String,
}

/// Body of `POST /documents/`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateDocumentRequest {
    pub title: String,
    pub content: String,
}

/// Reply of `POST /chats/{id}/send_message/`
///
/// The contract is `{ "message": ... }`. Some backends answer with the
/// persisted pair instead (`user_message` / `assistant_message`), so both
/// shapes are accepted here and resolved by [`SendMessageReply::reply_text`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SendMessageReply {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub assistant_message: Option<ReplyMessage>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub user_message: Option<ReplyMessage>,
    #[serde(default)]
    pub sources: Vec<String>,
}

/// Persisted message as echoed back by the backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplyMessage {
    #[serde(deserialize_with = "deserialize_string_or_null", default)]
    pub content: String,
}

impl SendMessageReply {
    /// The responder's text, preferring the plain `message` field
    pub fn reply_text(self) -> Option<String> {
        self.message
            .or_else(|| self.assistant_message.map(|m| m.content))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_chat_deserializes_server_shape() {
        let json = r#"{
            "id": 3,
            "title": "New Chat 3",
            "created_at": "2024-05-01T10:00:00Z",
            "updated_at": "2024-05-01T10:00:05Z",
            "messages": [
                {"id": 7, "chat": 3, "content": "hi", "is_user": true, "created_at": "2024-05-01T10:00:01Z"},
                {"id": 8, "chat": 3, "content": null, "is_user": false, "created_at": "2024-05-01T10:00:02.123456Z"}
            ]
        }"#;

        let chat: Chat = serde_json::from_str(json).unwrap();
        assert_eq!(chat.id, 3);
        assert_eq!(chat.title, "New Chat 3");
        assert_eq!(chat.messages.len(), 2);
        assert!(chat.messages[0].is_user);
        assert_eq!(chat.messages[1].content, "");
        assert_eq!(chat.max_message_id(), 8);
        assert!(chat.created_at.is_some());
    }

    #[test]
    fn test_chat_without_messages_field() {
        let chat: Chat = serde_json::from_str(r#"{"id": 1, "title": "New Chat 1"}"#).unwrap();
        assert_eq!(chat, Chat::new(1, "New Chat 1"));
        assert_eq!(chat.max_message_id(), 0);
        assert!(chat.last_message().is_none());
    }

    #[test]
    fn test_reply_text_prefers_message_field() {
        let reply: SendMessageReply = serde_json::from_str(
            r#"{"message": "hello", "assistant_message": {"content": "other"}}"#,
        )
        .unwrap();
        assert_eq!(reply.reply_text(), Some("hello".to_string()));
    }

    #[test]
    fn test_reply_text_falls_back_to_assistant_message() {
        let reply: SendMessageReply = serde_json::from_str(
            r#"{
                "user_message": {"id": 1, "chat": 1, "content": "hi", "is_user": true},
                "assistant_message": {"id": 2, "chat": 1, "content": "hello", "is_user": false},
                "sources": ["doc excerpt"]
            }"#,
        )
        .unwrap();
        assert_eq!(reply.sources, vec!["doc excerpt".to_string()]);
        assert_eq!(reply.reply_text(), Some("hello".to_string()));
    }

    #[test]
    fn test_reply_text_missing() {
        let reply: SendMessageReply = serde_json::from_str(r#"{"error": "boom"}"#).unwrap();
        assert_eq!(reply.reply_text(), None);
    }

    #[test]
    fn test_message_author() {
        let now = Utc::now();
        assert_eq!(Message::user(1, "a", now).author(), "user");
        assert_eq!(Message::responder(2, "b", now).author(), "assistant");
    }
}
