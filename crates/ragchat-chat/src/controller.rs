use std::sync::{Mutex, MutexGuard, PoisonError};

use ragchat_api::{ChatBackend, SyncError};
use ragchat_types::{Chat, ChatId, Document};
use thiserror::Error;

use crate::store::{SessionStore, StoreError};

/// Remote operations a handler can perform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    LoadChats,
    RefreshChat,
    CreateChat,
    SendMessage,
    ListDocuments,
    UploadDocument,
}

impl Operation {
    /// User-facing message shown when the remote call fails
    pub fn failure_message(&self) -> &'static str {
        match self {
            Self::LoadChats => "Failed to fetch chats. Please try again.",
            Self::RefreshChat => "Failed to refresh chat. Please try again.",
            Self::CreateChat => "Failed to create new chat. Please try again.",
            Self::SendMessage => "Failed to send message. Please try again.",
            Self::ListDocuments => "Failed to fetch documents. Please try again.",
            Self::UploadDocument => "Failed to upload document. Please try again.",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    #[error("another request is still in flight")]
    Busy,
    #[error("message is empty")]
    EmptyMessage,
    #[error("no chat is selected")]
    NoActiveChat,
    #[error("document title and content must not be empty")]
    EmptyDocument,
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("{}", .operation.failure_message())]
    Sync {
        operation: Operation,
        #[source]
        source: SyncError,
    },
}

/// Snapshot of everything the front-end renders.
///
/// Transitions build a new value; nothing is patched in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    pub store: SessionStore,
    /// A remote call is in flight; new handlers are rejected
    pub busy: bool,
    /// Message of the last failed remote call
    pub error: Option<String>,
}

impl SessionState {
    fn started(&self) -> Self {
        Self {
            store: self.store.clone(),
            busy: true,
            error: None,
        }
    }

    fn with_store(&self, store: SessionStore) -> Self {
        Self {
            store,
            busy: self.busy,
            error: self.error.clone(),
        }
    }

    fn failed(&self, message: &str) -> Self {
        Self {
            store: self.store.clone(),
            busy: self.busy,
            error: Some(message.to_string()),
        }
    }

    fn idle(&self) -> Self {
        Self {
            store: self.store.clone(),
            busy: false,
            error: self.error.clone(),
        }
    }

    fn without_error(&self) -> Self {
        Self {
            store: self.store.clone(),
            busy: self.busy,
            error: None,
        }
    }
}

/// Clears the busy flag when dropped, whatever way the handler exits
struct BusyGuard<'a> {
    state: &'a Mutex<SessionState>,
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        *state = state.idle();
    }
}

/// Drives the session store from UI events.
///
/// Each handler claims the busy flag, awaits exactly one backend call and
/// then commits the outcome. The state lock is never held across an await.
pub struct ChatController<B: ChatBackend> {
    backend: B,
    state: Mutex<SessionState>,
}

impl<B: ChatBackend> ChatController<B> {
    pub fn new(backend: B) -> Self {
        Self::with_store(backend, SessionStore::new())
    }

    pub fn with_store(backend: B, store: SessionStore) -> Self {
        Self {
            backend,
            state: Mutex::new(SessionState {
                store,
                ..SessionState::default()
            }),
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Copy of the current state
    pub fn snapshot(&self) -> SessionState {
        self.lock().clone()
    }

    fn lock(&self) -> MutexGuard<'_, SessionState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn store(&self) -> SessionStore {
        self.lock().store.clone()
    }

    /// Claim the busy flag and clear the previous error
    fn begin(&self) -> Result<BusyGuard<'_>, ActionError> {
        let mut state = self.lock();
        if state.busy {
            log::debug!("rejecting request while busy");
            return Err(ActionError::Busy);
        }
        *state = state.started();
        Ok(BusyGuard { state: &self.state })
    }

    fn commit(&self, store: SessionStore) {
        let mut state = self.lock();
        *state = state.with_store(store);
    }

    fn fail(&self, operation: Operation, source: SyncError) -> ActionError {
        log::warn!("{:?} failed: {}", operation, source);
        let mut state = self.lock();
        *state = state.failed(operation.failure_message());
        ActionError::Sync { operation, source }
    }

    pub fn clear_error(&self) {
        let mut state = self.lock();
        *state = state.without_error();
    }

    /// Make `chat_id` the active chat; returns whether it is listed.
    /// Selection is a local change and is allowed while busy.
    pub fn select_chat(&self, chat_id: ChatId) -> bool {
        let mut state = self.lock();
        let store = state.store.select(chat_id);
        let found = store.active_id() == Some(chat_id);
        *state = state.with_store(store);
        found
    }

    /// Replace the chat list with the server's listing
    pub async fn load_chats(&self) -> Result<usize, ActionError> {
        let _busy = self.begin()?;

        match self.backend.fetch_chats().await {
            Ok(chats) => {
                let store = self.store().replace_all(chats);
                let count = store.len();
                log::debug!("loaded {} chats", count);
                self.commit(store);
                Ok(count)
            }
            Err(e) => Err(self.fail(Operation::LoadChats, e)),
        }
    }

    /// Re-fetch one chat and replace its local copy
    pub async fn refresh_chat(&self, chat_id: ChatId) -> Result<Chat, ActionError> {
        let _busy = self.begin()?;

        match self.backend.fetch_chat(chat_id).await {
            Ok(chat) => {
                let store = self.store().upsert_chat(chat.clone());
                self.commit(store);
                Ok(chat)
            }
            Err(e) => Err(self.fail(Operation::RefreshChat, e)),
        }
    }

    /// Create a chat on the server, list it and make it active.
    ///
    /// Without a title (or with a blank one) the default "New Chat N" is used.
    pub async fn create_chat(&self, title: Option<&str>) -> Result<Chat, ActionError> {
        let _busy = self.begin()?;

        let title_hint = match title.map(str::trim) {
            Some(t) if !t.is_empty() => t.to_string(),
            _ => self.store().next_default_title(),
        };

        match self.backend.create_chat(&title_hint).await {
            Ok(chat) => {
                let store = self.store().upsert_chat(chat.clone()).select(chat.id);
                log::debug!("created chat {} ({})", chat.id, chat.title);
                self.commit(store);
                Ok(chat)
            }
            Err(e) => Err(self.fail(Operation::CreateChat, e)),
        }
    }

    /// Send `text` to the active chat and append the exchange on success.
    ///
    /// Blank text is rejected before any remote call. The exchange is
    /// appended to the chat that was active when the send started.
    pub async fn send_message(&self, text: &str) -> Result<Chat, ActionError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ActionError::EmptyMessage);
        }

        let chat_id = self.store().active_id().ok_or(ActionError::NoActiveChat)?;
        let _busy = self.begin()?;

        match self.backend.send_message(chat_id, text).await {
            Ok(reply) => {
                let (store, chat) = self.store().append_exchange(chat_id, text, &reply)?;
                self.commit(store);
                Ok(chat)
            }
            Err(e) => Err(self.fail(Operation::SendMessage, e)),
        }
    }

    pub async fn list_documents(&self) -> Result<Vec<Document>, ActionError> {
        let _busy = self.begin()?;

        self.backend
            .list_documents()
            .await
            .map_err(|e| self.fail(Operation::ListDocuments, e))
    }

    pub async fn upload_document(&self, title: &str, content: &str) -> Result<Document, ActionError> {
        let title = title.trim();
        if title.is_empty() || content.trim().is_empty() {
            return Err(ActionError::EmptyDocument);
        }

        let _busy = self.begin()?;

        self.backend
            .upload_document(title, content)
            .await
            .map_err(|e| self.fail(Operation::UploadDocument, e))
    }
}
