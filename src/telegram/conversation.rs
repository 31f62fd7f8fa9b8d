//! Yes/no question flow for ordinary users
//!
//! Two states: idle and awaiting an answer. `/start` always (re)issues the
//! question; a button press delivers the matching file and returns to idle;
//! anything else either repeats the question or hints at `/start`.

use teloxide::types::MessageId;

use super::messages;
use super::session::{ConversationState, SessionStore};
use super::types::{Action, Actor};
use crate::core::AppError;
use crate::storage::{resolve_artifact, FileIdStore, FileSlot, StaticFallback};

/// Asks the question and waits for the answer
pub fn begin(sessions: &SessionStore, actor: &Actor) -> Vec<Action> {
    sessions.set_conversation(actor.user_id, ConversationState::AwaitingAnswer);
    log::info!("User {} started the bot", actor.user_id);
    vec![Action::Prompt(messages::welcome(actor.first_name.as_deref()))]
}

/// Handles a button press
///
/// Honored in any state: the keyboard stays in the chat after a restart
/// while the session does not.
pub fn answer(
    sessions: &SessionStore,
    store: &FileIdStore,
    fallback: &StaticFallback,
    actor: &Actor,
    slot: FileSlot,
    message_id: Option<MessageId>,
) -> Vec<Action> {
    let ack = messages::answer_received(slot);
    let mut actions = vec![match message_id {
        Some(message_id) => Action::Edit { message_id, text: ack },
        None => Action::Text(ack),
    }];

    match resolve_artifact(store, fallback, slot) {
        Ok(source) => actions.push(Action::Document {
            source,
            caption: messages::document_caption(slot),
        }),
        Err(AppError::MissingArtifact(_)) => actions.push(Action::Text(messages::FILE_UNAVAILABLE.to_string())),
        Err(e) => {
            log::error!("Failed to resolve {} for user {}: {}", slot, actor.user_id, e);
            actions.push(Action::Text(messages::FILE_UNAVAILABLE.to_string()));
        }
    }

    sessions.set_conversation(actor.user_id, ConversationState::Idle);
    log::info!("User {} answered {}", actor.user_id, slot);
    actions
}

/// Reply to an event that is not part of the flow
pub fn nudge(sessions: &SessionStore, actor: &Actor) -> Vec<Action> {
    match sessions.conversation(actor.user_id) {
        ConversationState::AwaitingAnswer => vec![Action::Prompt(messages::ANSWER_PROMPT.to_string())],
        ConversationState::Idle => vec![Action::Text(messages::RESTART_HINT.to_string())],
    }
}
