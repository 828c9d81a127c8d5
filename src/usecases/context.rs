use std::{cell::RefCell, rc::Rc};

use crate::{
    domain::{
        chat_registry::ChatRegistry,
        message_registry::{MessageRegistry, SharedChatRegistry},
    },
    infra::config::AppConfig,
};

/// Config plus one pair of wired registries.
#[derive(Debug)]
pub struct AppContext {
    pub config: AppConfig,
    pub chats: SharedChatRegistry,
    pub messages: MessageRegistry,
}

impl AppContext {
    pub fn new(config: AppConfig) -> Self {
        let chats = Rc::new(RefCell::new(ChatRegistry::new()));
        let messages = MessageRegistry::new(Rc::clone(&chats));

        Self {
            config,
            chats,
            messages,
        }
    }
}
