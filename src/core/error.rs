use thiserror::Error;

use crate::storage::FileSlot;

/// Centralized error types for the application
///
/// None of these are fatal once the dispatcher is running: handlers log them
/// and turn them into a reply for the user or the admin.
#[derive(Error, Debug)]
pub enum AppError {
    /// Non-admin invoked an admin-only command
    #[error("Unauthorized: user {0} is not the administrator")]
    Unauthorized(i64),

    /// File id record could not be read or written
    #[error("Persistence error: {0}")]
    Persistence(String),

    /// Neither a stored file id nor a local file is available for the slot
    #[error("No file available for {0}")]
    MissingArtifact(FileSlot),

    /// Telegram API errors
    #[error("Telegram error: {0}")]
    Telegram(#[from] teloxide::RequestError),

    /// Startup configuration errors
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Type alias for Result with AppError
pub type AppResult<T> = Result<T, AppError>;

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Persistence(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Persistence(format!("invalid file id record: {}", err))
    }
}
