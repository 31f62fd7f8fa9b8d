//! Logging initialization and startup diagnostics

use std::path::Path;

use crate::core::config;
use crate::storage::FileSlot;

/// Initialize the console logger
///
/// Honors `RUST_LOG`; defaults to `info` when it is unset.
pub fn init_logger() {
    if std::env::var("RUST_LOG").is_err() {
        pretty_env_logger::formatted_timed_builder()
            .filter_level(log::LevelFilter::Info)
            .init();
    } else {
        pretty_env_logger::init_timed();
    }
}

/// Logs which delivery sources are configured for each slot
///
/// Lets an operator see at startup whether users answering now would get a
/// file or the "not available" apology.
pub fn log_files_configuration() {
    log::info!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    log::info!("📦 Files Configuration Check");
    log::info!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    log::info!("File id record: {}", config::FILE_IDS_PATH.as_str());

    match *config::admin::ADMIN_ID {
        Some(id) => log::info!("✅ ADMIN_ID: {}", id),
        None => log::warn!("⚠️  ADMIN_ID: not set, admin commands are disabled"),
    }

    for slot in FileSlot::ALL {
        let (file_id, path) = match slot {
            FileSlot::PosYes => (&*config::files::POS_YES_FILE_ID, config::files::POS_YES_FILE_PATH.as_str()),
            FileSlot::PosNo => (&*config::files::POS_NO_FILE_ID, config::files::POS_NO_FILE_PATH.as_str()),
        };
        if file_id.is_some() {
            log::info!("✅ {}: default file id configured", slot);
        }
        if Path::new(path).exists() {
            log::info!("✅ {}: local file {}", slot, path);
        } else {
            log::warn!("⚠️  {}: local file {} not found", slot, path);
        }
    }
}
