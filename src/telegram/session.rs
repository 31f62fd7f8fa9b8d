//! Per-actor conversation state
//!
//! Sessions live only in memory and start empty on every restart. An actor
//! with no entry is in the idle state; returning to idle removes the entry.

use dashmap::DashMap;

use crate::storage::FileSlot;

/// Where a user is in the yes/no question flow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConversationState {
    #[default]
    Idle,
    AwaitingAnswer,
}

/// Where an admin is in the file registration flow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AdminState {
    #[default]
    Idle,
    /// Next uploaded document is stored in this slot
    AwaitingFile(FileSlot),
}

/// In-memory session maps keyed by Telegram user id
#[derive(Debug, Default)]
pub struct SessionStore {
    conversations: DashMap<i64, ConversationState>,
    admins: DashMap<i64, AdminState>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn conversation(&self, user_id: i64) -> ConversationState {
        self.conversations.get(&user_id).map(|s| *s).unwrap_or_default()
    }

    pub fn set_conversation(&self, user_id: i64, state: ConversationState) {
        match state {
            ConversationState::Idle => {
                self.conversations.remove(&user_id);
            }
            state => {
                self.conversations.insert(user_id, state);
            }
        }
    }

    pub fn admin(&self, user_id: i64) -> AdminState {
        self.admins.get(&user_id).map(|s| *s).unwrap_or_default()
    }

    pub fn set_admin(&self, user_id: i64, state: AdminState) {
        match state {
            AdminState::Idle => {
                self.admins.remove(&user_id);
            }
            state => {
                self.admins.insert(user_id, state);
            }
        }
    }

    /// Number of actors with a non-idle session
    pub fn active_count(&self) -> usize {
        self.conversations.len() + self.admins.len()
    }

    /// Drops every session
    pub fn clear(&self) {
        self.conversations.clear();
        self.admins.clear();
    }
}
