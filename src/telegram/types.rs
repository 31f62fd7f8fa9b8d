//! Transport-independent inbound events and outbound actions
//!
//! Handlers translate Telegram updates into [`Inbound`] values, the router
//! turns them into [`Action`]s, and the executor performs those actions
//! against the Bot API. Everything between the two edges is plain data.

use teloxide::types::MessageId;

use crate::storage::{ArtifactSource, FileSlot};
use crate::telegram::bot::Command;

/// Identity of whoever sent the event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    pub user_id: i64,
    pub first_name: Option<String>,
}

impl Actor {
    pub fn new(user_id: i64) -> Self {
        Self {
            user_id,
            first_name: None,
        }
    }

    pub fn with_first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = Some(first_name.into());
        self
    }
}

/// What the actor did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InboundKind {
    /// Recognized bot command
    Command(Command),
    /// Button press on the yes/no question; `slot` is None for unknown data
    Answer {
        slot: Option<FileSlot>,
        message_id: Option<MessageId>,
    },
    /// Uploaded document
    Document { file_id: String, file_name: Option<String> },
    /// Anything else: free text, stickers, unknown commands
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inbound {
    pub actor: Actor,
    pub kind: InboundKind,
}

impl Inbound {
    pub fn new(actor: Actor, kind: InboundKind) -> Self {
        Self { actor, kind }
    }
}

/// Reply to perform in the chat the event came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Plain text message
    Text(String),
    /// HTML-formatted message
    Html(String),
    /// HTML-formatted message with the yes/no keyboard attached
    Prompt(String),
    /// Replace the text of an earlier bot message
    Edit { message_id: MessageId, text: String },
    /// Deliver a file
    Document { source: ArtifactSource, caption: String },
}
