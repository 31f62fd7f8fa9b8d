//! Routes inbound events to the conversation and admin flows
//!
//! [`Router::dispatch`] never touches the network: it reads and writes the
//! file id store and the session maps, and returns the replies to send.

use std::sync::Arc;

use super::bot::Command;
use super::session::{AdminState, ConversationState, SessionStore};
use super::types::{Action, Actor, Inbound, InboundKind};
use super::{admin, conversation, messages};
use crate::core::config;
use crate::storage::{FileIdStore, FileSlot, StaticFallback};

/// Runtime settings injected into the router
#[derive(Debug, Clone, Default)]
pub struct BotSettings {
    /// The only user allowed to run admin commands
    pub admin_id: Option<i64>,
    pub fallback: StaticFallback,
}

impl BotSettings {
    pub fn from_env() -> Self {
        Self {
            admin_id: *config::admin::ADMIN_ID,
            fallback: StaticFallback::from_env(),
        }
    }
}

pub struct Router {
    store: FileIdStore,
    settings: BotSettings,
    sessions: Arc<SessionStore>,
}

impl Router {
    pub fn new(store: FileIdStore, settings: BotSettings, sessions: Arc<SessionStore>) -> Self {
        Self {
            store,
            settings,
            sessions,
        }
    }

    pub fn store(&self) -> &FileIdStore {
        &self.store
    }

    fn is_admin(&self, actor: &Actor) -> bool {
        admin::is_admin(self.settings.admin_id, actor.user_id)
    }

    /// Handles one event and returns the replies for its chat
    pub fn dispatch(&self, event: &Inbound) -> Vec<Action> {
        let actor = &event.actor;
        match &event.kind {
            InboundKind::Command(cmd) => self.dispatch_command(actor, cmd),
            InboundKind::Answer {
                slot: Some(slot),
                message_id,
            } => conversation::answer(
                &self.sessions,
                &self.store,
                &self.settings.fallback,
                actor,
                *slot,
                *message_id,
            ),
            InboundKind::Answer { slot: None, .. } => {
                log::debug!("Ignoring unknown callback from user {}", actor.user_id);
                Vec::new()
            }
            InboundKind::Document { file_id, file_name } if self.is_admin(actor) => {
                admin::receive_document(&self.sessions, &self.store, actor, file_id, file_name.as_deref())
            }
            InboundKind::Document { .. } | InboundKind::Other => self.dispatch_other(actor),
        }
    }

    fn dispatch_command(&self, actor: &Actor, cmd: &Command) -> Vec<Action> {
        let slot = match cmd {
            Command::Start => {
                self.sessions.set_admin(actor.user_id, AdminState::Idle);
                return conversation::begin(&self.sessions, actor);
            }
            Command::SetYesSlot => Some(FileSlot::PosYes),
            Command::SetNoSlot => Some(FileSlot::PosNo),
            Command::Admin | Command::ListFileIds => None,
        };

        // Everything below start is admin-only
        if let Err(e) = admin::authorize(self.settings.admin_id, actor) {
            log::info!("Rejected {:?}: {}", cmd, e);
            return vec![Action::Text(messages::ADMIN_DENIED.to_string())];
        }

        match (cmd, slot) {
            (_, Some(slot)) => admin::request_file(&self.sessions, actor, slot),
            (Command::ListFileIds, None) => admin::list_file_ids(&self.store),
            (_, None) => admin::show_panel(&self.sessions, actor),
        }
    }

    fn dispatch_other(&self, actor: &Actor) -> Vec<Action> {
        if let AdminState::AwaitingFile(_) = self.sessions.admin(actor.user_id) {
            return admin::remind_file_expected();
        }
        conversation::nudge(&self.sessions, actor)
    }

    /// Runs [`Router::dispatch`] on the blocking pool
    ///
    /// Dispatch reads and writes the file id record synchronously, so async
    /// handlers call this instead. None if the task panicked.
    pub async fn dispatch_blocking(self: &Arc<Self>, event: Inbound) -> Option<Vec<Action>> {
        let router = Arc::clone(self);
        let user_id = event.actor.user_id;
        match tokio::task::spawn_blocking(move || router.dispatch(&event)).await {
            Ok(actions) => Some(actions),
            Err(e) => {
                log::error!("Dispatch task for user {} failed: {}", user_id, e);
                None
            }
        }
    }

    /// Current conversation state for `user_id`
    pub fn conversation_state(&self, user_id: i64) -> ConversationState {
        self.sessions.conversation(user_id)
    }

    /// Current admin state for `user_id`
    pub fn admin_state(&self, user_id: i64) -> AdminState {
        self.sessions.admin(user_id)
    }
}
