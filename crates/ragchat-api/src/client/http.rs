use std::path::PathBuf;

use async_trait::async_trait;
use ragchat_logging::{log_exchange_to_file, log_request, log_response, safe_truncate};
use ragchat_types::{
    Chat, ChatId, CreateChatRequest, CreateDocumentRequest, Document, SendMessageReply,
    SendMessageRequest,
};
use reqwest::Method;
use serde::de::DeserializeOwned;

use crate::client::{ChatBackend, SyncError};
use crate::config::{normalize_base_url, ConfigError, GatewayConfig};

/// Error bodies longer than this are cut before landing in a `SyncError`
const MAX_ERROR_BODY_CHARS: usize = 500;

/// Chat backend over HTTP/JSON
pub struct HttpChatBackend {
    base_url: String,
    client: reqwest::Client,
    verbose: bool,
    logs_dir: Option<PathBuf>,
}

impl HttpChatBackend {
    pub fn new(base_url: String) -> Self {
        // Ensure base_url doesn't end with a slash
        let base_url = base_url.trim_end_matches('/').to_string();
        Self {
            base_url,
            client: reqwest::Client::new(),
            verbose: false,
            logs_dir: None,
        }
    }

    pub fn from_config(config: &GatewayConfig) -> Result<Self, ConfigError> {
        let base_url = normalize_base_url(&config.base_url)?;
        Ok(Self {
            base_url,
            client: reqwest::Client::new(),
            verbose: config.verbose,
            logs_dir: config.logs_dir.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Perform one round-trip and decode the JSON reply
    async fn execute<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<T, SyncError> {
        let url = self.endpoint(path);
        log_request(&method, &url, body.as_ref(), self.verbose);

        let mut request = self
            .client
            .request(method.clone(), &url)
            .header("Accept", "application/json");
        if let Some(ref body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(|e| SyncError::Transport {
            url: url.clone(),
            message: e.to_string(),
        })?;

        let status = response.status();
        let headers = response.headers().clone();
        let response_text = response.text().await.map_err(|e| SyncError::Transport {
            url: url.clone(),
            message: e.to_string(),
        })?;

        log_response(&status, &headers, &response_text, self.verbose);
        if let Some(ref logs_dir) = self.logs_dir {
            if let Err(e) = log_exchange_to_file(logs_dir, &method, &url, body.as_ref(), &status, &response_text) {
                log::warn!("failed to write exchange log: {:#}", e);
            }
        }

        if !status.is_success() {
            log::warn!("{} {} returned {}", method, url, status.as_u16());
            return Err(SyncError::Status {
                url,
                status: status.as_u16(),
                body: safe_truncate(&response_text, MAX_ERROR_BODY_CHARS),
            });
        }

        serde_json::from_str(&response_text).map_err(|e| {
            log::warn!("{} {} returned an unreadable body: {}", method, url, e);
            SyncError::Payload {
                url,
                message: e.to_string(),
            }
        })
    }

    fn to_body<T: serde::Serialize>(&self, path: &str, value: &T) -> Result<serde_json::Value, SyncError> {
        serde_json::to_value(value).map_err(|e| SyncError::Payload {
            url: self.endpoint(path),
            message: e.to_string(),
        })
    }
}

#[async_trait]
impl ChatBackend for HttpChatBackend {
    async fn fetch_chats(&self) -> Result<Vec<Chat>, SyncError> {
        self.execute(Method::GET, "chats/", None).await
    }

    async fn fetch_chat(&self, chat_id: ChatId) -> Result<Chat, SyncError> {
        self.execute(Method::GET, &format!("chats/{}/", chat_id), None).await
    }

    async fn create_chat(&self, title_hint: &str) -> Result<Chat, SyncError> {
        let path = "chats/";
        let body = self.to_body(path, &CreateChatRequest {
            title: title_hint.to_string(),
        })?;
        self.execute(Method::POST, path, Some(body)).await
    }

    async fn send_message(&self, chat_id: ChatId, text: &str) -> Result<String, SyncError> {
        let path = format!("chats/{}/send_message/", chat_id);
        let body = self.to_body(&path, &SendMessageRequest {
            message: text.to_string(),
        })?;

        let reply: SendMessageReply = self.execute(Method::POST, &path, Some(body)).await?;
        reply.reply_text().ok_or_else(|| SyncError::Payload {
            url: self.endpoint(&path),
            message: "reply carries no message text".to_string(),
        })
    }

    async fn list_documents(&self) -> Result<Vec<Document>, SyncError> {
        self.execute(Method::GET, "documents/", None).await
    }

    async fn upload_document(&self, title: &str, content: &str) -> Result<Document, SyncError> {
        let path = "documents/";
        let body = self.to_body(path, &CreateDocumentRequest {
            title: title.to_string(),
            content: content.to_string(),
        })?;
        self.execute(Method::POST, path, Some(body)).await
    }
}
