use chrono::{DateTime, Utc};
use ragchat_types::{Chat, Message};

/// Build the next snapshot of `chat` after a successful exchange.
///
/// The input is left untouched; the returned chat carries the old transcript
/// followed by the user message and the responder message.
pub fn reconcile(chat: &Chat, user_text: &str, responder_text: &str) -> Chat {
    reconcile_at(chat, user_text, responder_text, Utc::now())
}

/// [`reconcile`] with an explicit clock reading.
///
/// Ids come from a counter scoped to the chat: one past the highest id in
/// the transcript for the user message, two past it for the reply. Times are
/// clamped so `created_at` never goes backwards along the transcript, even
/// if the clock does.
pub fn reconcile_at(chat: &Chat, user_text: &str, responder_text: &str, now: DateTime<Utc>) -> Chat {
    let next_id = chat.max_message_id() + 1;

    let user_created_at = match chat.last_message() {
        Some(last) if last.created_at > now => last.created_at,
        _ => now,
    };

    let user = Message::user(next_id, user_text, user_created_at);
    let responder = Message::responder(next_id + 1, responder_text, user_created_at);

    let mut messages = Vec::with_capacity(chat.messages.len() + 2);
    messages.extend(chat.messages.iter().cloned());
    messages.push(user);
    messages.push(responder);

    Chat {
        messages,
        ..chat.clone()
    }
}
