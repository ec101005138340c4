//! Conversation state management for ragchat
//!
//! This crate owns the chat list and the active selection, applies the
//! optimistic update after a successful send, and drives the remote gateway
//! from UI events.

pub mod controller;
pub mod reconcile;
pub mod store;

// Re-export commonly used types
pub use controller::{ActionError, ChatController, Operation, SessionState};
pub use reconcile::{reconcile, reconcile_at};
pub use store::{SessionStore, StoreError};
