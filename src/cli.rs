use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use crate::storage::FileSlot;

#[derive(Parser)]
#[command(name = "posbot")]
#[command(author, version, about = "Telegram bot that sends the right POS installer", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the bot with long polling
    Run,

    /// Upload a local file once and print its Telegram file id
    UploadFile {
        /// File to upload
        path: PathBuf,

        /// Chat to send the file to (your own user id works)
        #[arg(long, env = "YOUR_CHAT_ID")]
        chat_id: i64,

        /// Slot the file is meant for (pos_yes / pos_no), guessed from the file name if omitted
        #[arg(long)]
        slot: Option<FileSlot>,

        /// Caption for the uploaded message
        #[arg(long)]
        caption: Option<String>,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Guesses the slot a file belongs to from its name ("pos_yes.zip" → PosYes)
pub fn guess_slot(path: &Path) -> Option<FileSlot> {
    let name = path.file_name()?.to_string_lossy().to_lowercase();
    if name.contains("yes") {
        Some(FileSlot::PosYes)
    } else if name.contains("no") {
        Some(FileSlot::PosNo)
    } else {
        None
    }
}

/// Environment variable that pre-seeds the file id for `slot`
pub fn file_id_env_key(slot: FileSlot) -> String {
    format!("{}_FILE_ID", slot.to_string().to_uppercase())
}
