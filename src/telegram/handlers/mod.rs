//! Telegram bot handler tree configuration
//!
//! Handlers only translate updates into [`Inbound`](crate::telegram::Inbound)
//! events and send back whatever the router decides.

mod executor;
mod schema;
mod types;

pub use executor::execute;
pub use schema::schema;
pub use types::{actor_from_message, actor_from_user, HandlerDeps, HandlerError};
