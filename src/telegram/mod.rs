//! Telegram bot integration: state machines, routing and handlers

pub mod admin;
pub mod bot;
pub mod conversation;
pub mod handlers;
pub mod messages;
pub mod router;
pub mod session;
pub mod types;

// Re-exports for convenience
pub use bot::{create_bot, setup_bot_commands, Command};
pub use handlers::{schema, HandlerDeps, HandlerError};
pub use router::{BotSettings, Router};
pub use session::{AdminState, ConversationState, SessionStore};
pub use types::{Action, Actor, Inbound, InboundKind};
