//! Admin-only file registration
//!
//! `/set_yes_slot` and `/set_no_slot` arm the session; the next uploaded
//! document is stored under that slot. Every entry point here assumes the
//! caller already passed [`authorize`].

use super::messages;
use super::session::{AdminState, ConversationState, SessionStore};
use super::types::{Action, Actor};
use crate::core::{AppError, AppResult};
use crate::storage::{FileIdStore, FileSlot};

/// Check if user is the configured admin
pub fn is_admin(admin_id: Option<i64>, user_id: i64) -> bool {
    admin_id == Some(user_id)
}

pub fn authorize(admin_id: Option<i64>, actor: &Actor) -> AppResult<()> {
    if is_admin(admin_id, actor.user_id) {
        Ok(())
    } else {
        Err(AppError::Unauthorized(actor.user_id))
    }
}

/// Shows the command list and cancels a pending upload
pub fn show_panel(sessions: &SessionStore, actor: &Actor) -> Vec<Action> {
    if let AdminState::AwaitingFile(slot) = sessions.admin(actor.user_id) {
        log::info!("Admin {} cancelled the pending {} upload", actor.user_id, slot);
    }
    sessions.set_admin(actor.user_id, AdminState::Idle);
    vec![Action::Html(messages::ADMIN_PANEL.to_string())]
}

/// Arms the session so the next document lands in `slot`
pub fn request_file(sessions: &SessionStore, actor: &Actor, slot: FileSlot) -> Vec<Action> {
    sessions.set_conversation(actor.user_id, ConversationState::Idle);
    sessions.set_admin(actor.user_id, AdminState::AwaitingFile(slot));
    log::info!("Admin {} is uploading a file for {}", actor.user_id, slot);
    vec![Action::Text(messages::request_file(slot))]
}

/// Stores an uploaded document if a slot was requested first
pub fn receive_document(
    sessions: &SessionStore,
    store: &FileIdStore,
    actor: &Actor,
    file_id: &str,
    file_name: Option<&str>,
) -> Vec<Action> {
    let slot = match sessions.admin(actor.user_id) {
        AdminState::AwaitingFile(slot) => slot,
        AdminState::Idle => return vec![Action::Text(messages::DOCUMENT_WITHOUT_SLOT.to_string())],
    };

    let reply = match store.put(slot, file_id) {
        Ok(()) => Action::Html(messages::file_saved(slot, file_name, file_id)),
        Err(e) => {
            log::error!("Admin {} upload for {} was not saved: {}", actor.user_id, slot, e);
            Action::Text(messages::SAVE_FAILED.to_string())
        }
    };

    sessions.set_admin(actor.user_id, AdminState::Idle);
    vec![reply]
}

/// Reminder sent for non-document events while a file is expected
pub fn remind_file_expected() -> Vec<Action> {
    vec![Action::Text(messages::FILE_EXPECTED.to_string())]
}

/// Read-only report of the stored file ids
pub fn list_file_ids(store: &FileIdStore) -> Vec<Action> {
    vec![Action::Text(messages::file_ids_report(&store.snapshot()))]
}
