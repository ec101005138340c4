use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use mockall::mock;
use ragchat_api::{ChatBackend, SyncError};
use ragchat_types::{Chat, ChatId, Document, Message};
use tokio::sync::Notify;

mock! {
    pub Backend {}

    #[async_trait]
    impl ChatBackend for Backend {
        async fn fetch_chats(&self) -> Result<Vec<Chat>, SyncError>;
        async fn fetch_chat(&self, chat_id: ChatId) -> Result<Chat, SyncError>;
        async fn create_chat(&self, title_hint: &str) -> Result<Chat, SyncError>;
        async fn send_message(&self, chat_id: ChatId, text: &str) -> Result<String, SyncError>;
        async fn list_documents(&self) -> Result<Vec<Document>, SyncError>;
        async fn upload_document(&self, title: &str, content: &str) -> Result<Document, SyncError>;
    }
}

pub fn ts(secs: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(1_714_557_600 + secs, 0).unwrap()
}

pub fn server_error(path: &str) -> SyncError {
    SyncError::Status {
        url: format!("http://localhost:8000/api/{}", path),
        status: 500,
        body: r#"{"error": "Error processing message: upstream down"}"#.to_string(),
    }
}

/// Chat with one prior exchange, as the server would list it
pub fn chat_with_history(id: ChatId, title: &str) -> Chat {
    Chat::new(id, title).with_messages(vec![
        Message::user(1, "earlier question", ts(0)),
        Message::responder(2, "earlier answer", ts(1)),
    ])
}

/// Gate shared between a test and a [`GatedBackend`]
#[derive(Default)]
pub struct Gate {
    pub started: Notify,
    pub release: Notify,
}

/// Backend whose `send_message` parks until the test opens the gate
pub struct GatedBackend {
    pub gate: Arc<Gate>,
    pub reply: String,
}

impl GatedBackend {
    pub fn new(reply: &str) -> (Self, Arc<Gate>) {
        let gate = Arc::new(Gate::default());
        (
            Self {
                gate: gate.clone(),
                reply: reply.to_string(),
            },
            gate,
        )
    }
}

#[async_trait]
impl ChatBackend for GatedBackend {
    async fn fetch_chats(&self) -> Result<Vec<Chat>, SyncError> {
        Ok(Vec::new())
    }

    async fn fetch_chat(&self, chat_id: ChatId) -> Result<Chat, SyncError> {
        Ok(Chat::new(chat_id, "fetched"))
    }

    async fn create_chat(&self, title_hint: &str) -> Result<Chat, SyncError> {
        Ok(Chat::new(99, title_hint))
    }

    async fn send_message(&self, _chat_id: ChatId, _text: &str) -> Result<String, SyncError> {
        self.gate.started.notify_one();
        self.gate.release.notified().await;
        Ok(self.reply.clone())
    }

    async fn list_documents(&self) -> Result<Vec<Document>, SyncError> {
        Ok(Vec::new())
    }

    async fn upload_document(&self, title: &str, content: &str) -> Result<Document, SyncError> {
        Ok(Document {
            id: 1,
            title: title.to_string(),
            content: content.to_string(),
            vectorstore_path: None,
            created_at: None,
            updated_at: None,
        })
    }
}
