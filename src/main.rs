use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use dotenvy::dotenv;
use teloxide::prelude::*;
use teloxide::types::InputFile;

use posbot::cli::{file_id_env_key, guess_slot, Cli, Commands};
use posbot::core::{config, init_logger, log_files_configuration};
use posbot::storage::{FileIdStore, FileSlot};
use posbot::telegram::{create_bot, schema, setup_bot_commands, BotSettings, HandlerDeps, Router, SessionStore};

/// Main entry point for the Telegram bot
///
/// Parses CLI arguments and dispatches to appropriate subcommand.
#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env if present, before any config is read
    let _ = dotenv();

    let cli = Cli::parse_args();

    init_logger();

    // Log panics inside handlers instead of only printing them
    std::panic::set_hook(Box::new(|panic_info| {
        log::error!("Panic caught: {}", panic_info);
    }));

    match cli.command {
        Some(Commands::Run) | None => run_bot().await,
        Some(Commands::UploadFile {
            path,
            chat_id,
            slot,
            caption,
        }) => run_upload_file(path, chat_id, slot, caption).await,
    }
}

/// Runs the dispatcher until Ctrl-C
async fn run_bot() -> Result<()> {
    log::info!("Starting bot...");
    log_files_configuration();

    let bot = create_bot()?;
    if let Err(e) = setup_bot_commands(&bot).await {
        log::warn!("Failed to set bot commands: {}", e);
    }

    let store = FileIdStore::new(config::FILE_IDS_PATH.as_str());
    let sessions = Arc::new(SessionStore::new());
    let router = Arc::new(Router::new(store, BotSettings::from_env(), Arc::clone(&sessions)));
    let deps = HandlerDeps::new(router);

    Dispatcher::builder(bot, schema(deps))
        .default_handler(|upd| async move {
            log::debug!("Unhandled update: {:?}", upd.kind);
        })
        .error_handler(LoggingErrorHandler::with_custom_text("An error has occurred in the dispatcher"))
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    log::info!("Bot stopped, dropping {} active sessions", sessions.active_count());
    sessions.clear();
    Ok(())
}

/// Uploads a file once and prints the issued file id
async fn run_upload_file(path: PathBuf, chat_id: i64, slot: Option<FileSlot>, caption: Option<String>) -> Result<()> {
    if !path.is_file() {
        return Err(anyhow::anyhow!("File not found: {}", path.display()));
    }

    let bot = create_bot()?;
    println!("📤 Uploading {}...", path.display());

    let mut request = bot.send_document(ChatId(chat_id), InputFile::file(path.clone()));
    if let Some(caption) = caption {
        request = request.caption(caption);
    }
    let message = request.await?;

    let file_id = message
        .document()
        .map(|doc| doc.file.id.0.clone())
        .ok_or_else(|| anyhow::anyhow!("Telegram did not return a document"))?;

    println!("✅ Uploaded {}", path.display());
    println!("🆔 File ID: {}", file_id);
    match slot.or_else(|| guess_slot(&path)) {
        Some(slot) => {
            println!("💡 Pre-seed it in .env:");
            println!("   {}={}", file_id_env_key(slot), file_id);
        }
        None => println!("💡 Pass --slot pos_yes or --slot pos_no to get the matching .env line"),
    }

    Ok(())
}
