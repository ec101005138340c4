use async_trait::async_trait;
use ragchat_types::{Chat, ChatId, Document};
use thiserror::Error;

pub mod http;

pub use http::HttpChatBackend;

/// Any failure of a remote call.
///
/// The variants classify the cause for logging; callers are expected to
/// treat them uniformly.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyncError {
    /// The request never produced a response (connection refused, DNS, reset...)
    #[error("request to {url} failed: {message}")]
    Transport { url: String, message: String },

    /// The server answered with a non-2xx status
    #[error("server returned {status} for {url}: {body}")]
    Status { url: String, status: u16, body: String },

    /// The response body could not be decoded into the expected shape
    #[error("unexpected response from {url}: {message}")]
    Payload { url: String, message: String },
}

impl SyncError {
    pub fn url(&self) -> &str {
        match self {
            Self::Transport { url, .. } | Self::Status { url, .. } | Self::Payload { url, .. } => url,
        }
    }
}

/// Chat backend trait - one operation per backend capability.
///
/// Implementations perform a single request/response round-trip per call,
/// with no retry, and never mutate application state.
#[async_trait]
pub trait ChatBackend: Send + Sync {
    /// List every chat with its transcript
    async fn fetch_chats(&self) -> Result<Vec<Chat>, SyncError>;

    /// Fetch a single chat with its transcript
    async fn fetch_chat(&self, chat_id: ChatId) -> Result<Chat, SyncError>;

    /// Create a chat; the server is authoritative for the returned id and title
    async fn create_chat(&self, title_hint: &str) -> Result<Chat, SyncError>;

    /// Send a user message and return the responder's reply text.
    /// `text` is sent as given.
    async fn send_message(&self, chat_id: ChatId, text: &str) -> Result<String, SyncError>;

    /// List reference documents
    async fn list_documents(&self) -> Result<Vec<Document>, SyncError>;

    /// Upload a reference document
    async fn upload_document(&self, title: &str, content: &str) -> Result<Document, SyncError>;
}
