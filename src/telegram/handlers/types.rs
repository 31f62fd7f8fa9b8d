//! Handler types and dependencies

use std::sync::Arc;

use teloxide::types::{Message, User};

use crate::telegram::router::Router;
use crate::telegram::types::Actor;

/// Error type for handlers
pub type HandlerError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Dependencies required by handlers
#[derive(Clone)]
pub struct HandlerDeps {
    pub router: Arc<Router>,
}

impl HandlerDeps {
    pub fn new(router: Arc<Router>) -> Self {
        Self { router }
    }
}

/// Builds the actor for a Telegram user, if the id fits an i64
pub fn actor_from_user(user: &User) -> Option<Actor> {
    let user_id = i64::try_from(user.id.0).ok()?;
    Some(Actor::new(user_id).with_first_name(user.first_name.clone()))
}

/// Sender of a message; None for channel posts and service messages
pub fn actor_from_message(msg: &Message) -> Option<Actor> {
    msg.from.as_ref().and_then(actor_from_user)
}
