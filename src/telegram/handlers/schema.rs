//! Dispatcher schema and handler chain builders

use teloxide::dispatching::{UpdateFilterExt, UpdateHandler};
use teloxide::prelude::*;
use teloxide::types::Message;

use super::executor::execute;
use super::types::{actor_from_message, actor_from_user, HandlerDeps, HandlerError};
use crate::storage::FileSlot;
use crate::telegram::bot::Command;
use crate::telegram::types::{Inbound, InboundKind};

/// Creates the main dispatcher schema for the Telegram bot.
///
/// Branch order matters: commands first, then documents, then every other
/// message, then button presses.
pub fn schema(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    dptree::entry()
        .branch(command_handler(deps.clone()))
        .branch(document_handler(deps.clone()))
        .branch(message_handler(deps.clone()))
        .branch(callback_handler(deps))
}

/// Routes one event and sends the replies; never fails the dispatcher
async fn route(bot: &Bot, deps: &HandlerDeps, chat_id: ChatId, event: Inbound) {
    let user_id = event.actor.user_id;
    let Some(actions) = deps.router.dispatch_blocking(event).await else {
        return;
    };
    let failed = execute(bot, chat_id, actions).await;
    if failed > 0 {
        log::warn!("{} replies to user {} were dropped", failed, user_id);
    }
}

/// Handler for bot commands (/start, /admin, /set_yes_slot, ...)
fn command_handler(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    Update::filter_message().branch(dptree::entry().filter_command::<Command>().endpoint(
        move |bot: Bot, msg: Message, cmd: Command| {
            let deps = deps.clone();
            async move {
                log::info!("🎯 Received command: {:?} from chat {}", cmd, msg.chat.id);
                if let Some(actor) = actor_from_message(&msg) {
                    route(&bot, &deps, msg.chat.id, Inbound::new(actor, InboundKind::Command(cmd))).await;
                }
                Ok(())
            }
        },
    ))
}

/// Handler for uploaded documents
fn document_handler(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    Update::filter_message()
        .filter(|msg: Message| msg.document().is_some())
        .endpoint(move |bot: Bot, msg: Message| {
            let deps = deps.clone();
            async move {
                let (Some(actor), Some(doc)) = (actor_from_message(&msg), msg.document()) else {
                    return Ok(());
                };
                let kind = InboundKind::Document {
                    file_id: doc.file.id.0.clone(),
                    file_name: doc.file_name.clone(),
                };
                route(&bot, &deps, msg.chat.id, Inbound::new(actor, kind)).await;
                Ok(())
            }
        })
}

/// Handler for everything else sent as a message
fn message_handler(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    Update::filter_message().endpoint(move |bot: Bot, msg: Message| {
        let deps = deps.clone();
        async move {
            if let Some(actor) = actor_from_message(&msg) {
                route(&bot, &deps, msg.chat.id, Inbound::new(actor, InboundKind::Other)).await;
            }
            Ok(())
        }
    })
}

/// Handler for the yes/no buttons
fn callback_handler(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    Update::filter_callback_query().endpoint(move |bot: Bot, q: CallbackQuery| {
        let deps = deps.clone();
        async move {
            // Stop the button spinner before any slower work
            if let Err(e) = bot.answer_callback_query(q.id.clone()).await {
                log::warn!("Failed to answer callback query: {}", e);
            }

            let Some(message) = q.message.as_ref() else {
                return Ok(());
            };
            let Some(actor) = actor_from_user(&q.from) else {
                return Ok(());
            };

            let slot = q.data.as_deref().and_then(|data| data.parse::<FileSlot>().ok());
            let kind = InboundKind::Answer {
                slot,
                message_id: Some(message.id()),
            };
            route(&bot, &deps, message.chat().id, Inbound::new(actor, kind)).await;
            Ok(())
        }
    })
}
