//! Bot initialization
//!
//! This module contains:
//! - Command enum definition
//! - Bot instance creation
//! - Command menu registration

use reqwest::ClientBuilder;
use teloxide::prelude::*;
use teloxide::types::BotCommand;
use teloxide::utils::command::BotCommands;

use crate::core::{config, AppError};

/// Bot commands enum with descriptions
#[derive(BotCommands, Clone, Copy, Debug, PartialEq, Eq)]
#[command(rename_rule = "snake_case", description = "Available commands:")]
pub enum Command {
    #[command(description = "answer the question and get the software")]
    Start,
    #[command(description = "admin panel (admin only)")]
    Admin,
    #[command(description = "upload the file for shops with a POS system (admin only)")]
    SetYesSlot,
    #[command(description = "upload the file for shops without a POS system (admin only)")]
    SetNoSlot,
    #[command(description = "show the current file IDs (admin only)")]
    ListFileIds,
}

/// Creates a Bot instance with custom or default API URL
///
/// # Returns
/// * `Ok(Bot)` - Successfully created bot instance
/// * `Err(AppError::Config)` - Missing token or invalid BOT_API_URL
pub fn create_bot() -> Result<Bot, AppError> {
    if config::BOT_TOKEN.is_empty() {
        return Err(AppError::Config("BOT_TOKEN environment variable not set".to_string()));
    }

    let client = ClientBuilder::new()
        .timeout(config::network::timeout())
        .build()
        .map_err(|e| AppError::Config(format!("Failed to build HTTP client: {}", e)))?;
    let bot = Bot::with_client(config::BOT_TOKEN.as_str(), client);

    // Check if local Bot API server is configured
    match std::env::var("BOT_API_URL") {
        Ok(bot_api_url) => {
            log::info!("Using custom Bot API URL: {}", bot_api_url);
            let url = url::Url::parse(&bot_api_url)
                .map_err(|e| AppError::Config(format!("Invalid BOT_API_URL: {}", e)))?;
            Ok(bot.set_api_url(url))
        }
        Err(_) => Ok(bot),
    }
}

/// Sets up bot commands in Telegram UI
///
/// Only `/start` is advertised; admin commands stay hidden from the menu.
pub async fn setup_bot_commands(bot: &Bot) -> Result<(), teloxide::RequestError> {
    bot.set_my_commands(vec![BotCommand::new("start", "answer the question and get the software")])
        .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commands_parse_snake_case() {
        assert_eq!(Command::parse("/start", "posbot").ok(), Some(Command::Start));
        assert_eq!(Command::parse("/set_yes_slot", "posbot").ok(), Some(Command::SetYesSlot));
        assert_eq!(Command::parse("/set_no_slot", "posbot").ok(), Some(Command::SetNoSlot));
        assert_eq!(Command::parse("/list_file_ids", "posbot").ok(), Some(Command::ListFileIds));
        assert_eq!(Command::parse("/admin@posbot", "posbot").ok(), Some(Command::Admin));
    }

    #[test]
    fn test_unknown_command_does_not_parse() {
        assert!(Command::parse("/file_ids", "posbot").is_err());
        assert!(Command::parse("hello", "posbot").is_err());
    }
}
