//! Performs router actions against the Bot API

use teloxide::prelude::*;
use teloxide::types::{FileId, InputFile, ParseMode};

use crate::core::AppError;
use crate::storage::ArtifactSource;
use crate::telegram::messages;
use crate::telegram::types::Action;

/// Sends every action to `chat_id` in order
///
/// A failed action is logged and the rest still run, so an acknowledgement
/// that cannot be edited does not block the file delivery behind it.
/// Returns the number of failed actions.
pub async fn execute(bot: &Bot, chat_id: ChatId, actions: Vec<Action>) -> usize {
    let mut failed = 0;
    for action in actions {
        if let Err(e) = perform(bot, chat_id, action).await {
            failed += 1;
            log::error!("Failed to reply in chat {}: {}", chat_id, e);
        }
    }
    failed
}

async fn perform(bot: &Bot, chat_id: ChatId, action: Action) -> Result<(), AppError> {
    match action {
        Action::Text(text) => {
            bot.send_message(chat_id, text).await?;
        }
        Action::Html(text) => {
            bot.send_message(chat_id, text).parse_mode(ParseMode::Html).await?;
        }
        Action::Prompt(text) => {
            bot.send_message(chat_id, text)
                .parse_mode(ParseMode::Html)
                .reply_markup(messages::answer_keyboard())
                .await?;
        }
        Action::Edit { message_id, text } => {
            bot.edit_message_text(chat_id, message_id, text).await?;
        }
        Action::Document { source, caption } => {
            let file = match source {
                ArtifactSource::FileId(file_id) => InputFile::file_id(FileId(file_id)),
                ArtifactSource::Path(path) => InputFile::file(path),
            };
            bot.send_document(chat_id, file).caption(caption).await?;
        }
    }
    Ok(())
}
