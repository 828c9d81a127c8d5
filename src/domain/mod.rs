//! Domain layer: users, messages, chats and the two registries keeping them consistent.

pub mod chat;
pub mod chat_registry;
pub mod message;
pub mod message_registry;
pub mod user;

/// Returns the domain module name for smoke checks.
pub fn module_name() -> &'static str {
    "domain"
}
