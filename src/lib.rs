//! posbot - Telegram bot that asks whether a shop has a POS system and sends
//! the matching installer archive
//!
//! # Module Structure
//!
//! - `core`: configuration, errors, logging
//! - `storage`: file id record and delivery source lookup
//! - `telegram`: conversation/admin state machines, router and handlers
//! - `cli`: command line interface

pub mod cli;
pub mod core;
pub mod storage;
pub mod telegram;

// Re-export commonly used types for convenience
pub use crate::core::{config, AppError, AppResult};
pub use storage::{FileIdStore, FileSlot};
pub use telegram::{schema, BotSettings, HandlerDeps, Router};
