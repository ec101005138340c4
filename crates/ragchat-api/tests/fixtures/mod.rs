use serde_json::{json, Value};
use wiremock::matchers::*;
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Mock chat backend for exercising the HTTP gateway
pub struct ChatMockServer {
    server: MockServer,
}

impl ChatMockServer {
    pub async fn new() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    /// API root as the gateway expects it
    pub fn api_url(&self) -> String {
        format!("{}/api", self.server.uri())
    }

    pub fn chat_json(id: i64, title: &str, messages: Value) -> Value {
        json!({
            "id": id,
            "title": title,
            "messages": messages,
            "created_at": "2024-05-01T10:00:00Z",
            "updated_at": "2024-05-01T10:00:00Z"
        })
    }

    pub fn message_json(id: i64, chat: i64, content: &str, is_user: bool, created_at: &str) -> Value {
        json!({
            "id": id,
            "chat": chat,
            "content": content,
            "is_user": is_user,
            "created_at": created_at
        })
    }

    /// `GET /api/chats/` answers with the given list
    pub async fn mock_list_chats(&self, chats: Value) {
        Mock::given(method("GET"))
            .and(path("/api/chats/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(chats))
            .expect(1)
            .mount(&self.server)
            .await;
    }

    /// `GET /api/chats/{id}/` answers with the given chat
    pub async fn mock_get_chat(&self, id: i64, chat: Value) {
        Mock::given(method("GET"))
            .and(path(format!("/api/chats/{}/", id)))
            .respond_with(ResponseTemplate::new(200).set_body_json(chat))
            .mount(&self.server)
            .await;
    }

    /// `POST /api/chats/` with the expected title creates chat `id`
    pub async fn mock_create_chat(&self, title: &str, id: i64) {
        Mock::given(method("POST"))
            .and(path("/api/chats/"))
            .and(header("content-type", "application/json"))
            .and(body_json(json!({ "title": title })))
            .respond_with(
                ResponseTemplate::new(201).set_body_json(Self::chat_json(id, title, json!([]))),
            )
            .expect(1)
            .mount(&self.server)
            .await;
    }

    /// `POST /api/chats/{id}/send_message/` with the expected text replies `reply`
    pub async fn mock_send_message(&self, chat_id: i64, message: &str, reply: &str) {
        Mock::given(method("POST"))
            .and(path(format!("/api/chats/{}/send_message/", chat_id)))
            .and(body_json(json!({ "message": message })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "message": reply })))
            .expect(1)
            .mount(&self.server)
            .await;
    }

    /// Send endpoint answering with the persisted-pair shape
    pub async fn mock_send_message_pair_reply(&self, chat_id: i64, reply: &str) {
        Mock::given(method("POST"))
            .and(path(format!("/api/chats/{}/send_message/", chat_id)))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "user_message": Self::message_json(10, chat_id, "question", true, "2024-05-01T10:00:00Z"),
                "assistant_message": Self::message_json(11, chat_id, reply, false, "2024-05-01T10:00:01Z"),
                "sources": []
            })))
            .mount(&self.server)
            .await;
    }

    /// Any request on `path` answers with `status` and a JSON error body
    pub async fn mock_error(&self, http_method: &str, endpoint: &str, status: u16, error: &str) {
        Mock::given(method(http_method))
            .and(path(endpoint.to_string()))
            .respond_with(ResponseTemplate::new(status).set_body_json(json!({ "error": error })))
            .mount(&self.server)
            .await;
    }

    /// Any request on `path` answers 200 with a raw, non-JSON body
    pub async fn mock_raw(&self, http_method: &str, endpoint: &str, body: &str) {
        Mock::given(method(http_method))
            .and(path(endpoint.to_string()))
            .respond_with(ResponseTemplate::new(200).set_body_string(body.to_string()))
            .mount(&self.server)
            .await;
    }

    /// `GET /api/documents/` answers with the given list
    pub async fn mock_list_documents(&self, documents: Value) {
        Mock::given(method("GET"))
            .and(path("/api/documents/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(documents))
            .mount(&self.server)
            .await;
    }

    /// `POST /api/documents/` stores the document as `id`
    pub async fn mock_upload_document(&self, title: &str, content: &str, id: i64) {
        Mock::given(method("POST"))
            .and(path("/api/documents/"))
            .and(body_json(json!({ "title": title, "content": content })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "id": id,
                "title": title,
                "content": content,
                "vectorstore_path": format!("vectorstores/{}", id),
                "created_at": "2024-05-01T10:00:00Z",
                "updated_at": "2024-05-01T10:00:00Z"
            })))
            .expect(1)
            .mount(&self.server)
            .await;
    }
}
