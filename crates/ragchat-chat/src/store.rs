use ragchat_types::{Chat, ChatId};
use thiserror::Error;

use crate::reconcile::reconcile;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("chat {0} not found")]
    ChatNotFound(ChatId),
}

/// Immutable snapshot of the chat list and the active selection.
///
/// Every transition returns a new snapshot. The active chat is kept as an
/// id into `chats`, so the selected view and the listed view are always the
/// same value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionStore {
    chats: Vec<Chat>,
    active: Option<ChatId>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from a list, collapsing duplicate ids
    pub fn from_chats(chats: Vec<Chat>) -> Self {
        Self::new().replace_all(chats)
    }

    /// Current chat list, in display order
    pub fn chats(&self) -> &[Chat] {
        &self.chats
    }

    pub fn len(&self) -> usize {
        self.chats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chats.is_empty()
    }

    pub fn get(&self, chat_id: ChatId) -> Option<&Chat> {
        self.chats.iter().find(|c| c.id == chat_id)
    }

    pub fn contains(&self, chat_id: ChatId) -> bool {
        self.get(chat_id).is_some()
    }

    pub fn active_id(&self) -> Option<ChatId> {
        self.active
    }

    /// The active chat, resolved against the list
    pub fn active(&self) -> Option<&Chat> {
        self.active.and_then(|id| self.get(id))
    }

    /// Title offered to the server when creating a chat
    pub fn next_default_title(&self) -> String {
        format!("New Chat {}", self.chats.len() + 1)
    }

    /// Make `chat_id` the active chat. Unknown ids leave the store as is.
    pub fn select(&self, chat_id: ChatId) -> Self {
        if !self.contains(chat_id) {
            log::debug!("ignoring selection of unknown chat {}", chat_id);
            return self.clone();
        }
        Self {
            chats: self.chats.clone(),
            active: Some(chat_id),
        }
    }

    /// Insert `chat`, or replace the entry with the same id in place
    pub fn upsert_chat(&self, chat: Chat) -> Self {
        let mut chats = self.chats.clone();
        match chats.iter_mut().find(|c| c.id == chat.id) {
            Some(slot) => *slot = chat,
            None => chats.push(chat),
        }
        Self {
            chats,
            active: self.active,
        }
    }

    /// Replace the whole list with a fresh server listing.
    ///
    /// Duplicate ids keep the first position and the last value. The active
    /// selection survives only if its chat is still listed.
    pub fn replace_all(&self, chats: Vec<Chat>) -> Self {
        let merged = chats
            .into_iter()
            .fold(Self::new(), |store, chat| store.upsert_chat(chat));

        let active = self.active.filter(|id| merged.contains(*id));
        Self {
            chats: merged.chats,
            active,
        }
    }

    /// Append a user/responder exchange to `chat_id`.
    ///
    /// Returns the next snapshot together with the updated chat.
    pub fn append_exchange(
        &self,
        chat_id: ChatId,
        user_text: &str,
        responder_text: &str,
    ) -> Result<(Self, Chat), StoreError> {
        let chat = self.get(chat_id).ok_or(StoreError::ChatNotFound(chat_id))?;
        let updated = reconcile(chat, user_text, responder_text);
        Ok((self.upsert_chat(updated.clone()), updated))
    }
}
