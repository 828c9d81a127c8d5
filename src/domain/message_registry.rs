//! Flat message store that mirrors every mutation into the owning chat.

use std::{cell::RefCell, rc::Rc};

use super::{chat::Chat, chat_registry::ChatRegistry, message::Message};

const FIRST_MESSAGE_ID: i64 = 1;

/// Shared handle to the chat registry. Both registries live on one thread.
pub type SharedChatRegistry = Rc<RefCell<ChatRegistry>>;

#[derive(Debug)]
pub struct MessageRegistry {
    messages: Vec<Message>,
    next_id: i64,
    chats: SharedChatRegistry,
}

impl MessageRegistry {
    pub fn new(chats: SharedChatRegistry) -> Self {
        Self {
            messages: Vec::new(),
            next_id: FIRST_MESSAGE_ID,
            chats,
        }
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn chats(&self) -> &SharedChatRegistry {
        &self.chats
    }

    /// Stores `message` in the chat of its sender/receiver pair, creating the
    /// chat first if the pair has none. Returns the assigned message id.
    pub fn add(&mut self, message: Message) -> i64 {
        let mut chats = self.chats.borrow_mut();

        if chats
            .find_by_participants(&message.sender, &message.receiver)
            .is_none()
        {
            chats.add(Chat::new([
                message.sender.clone(),
                message.receiver.clone(),
            ]));
        }

        let stored = Message {
            id: self.next_id,
            ..message
        };
        self.next_id += 1;

        if let Some(chat) = chats.find_by_participants_mut(&stored.sender, &stored.receiver) {
            chat.append_message(stored.clone());
            tracing::debug!(chat_id = chat.id, message_id = stored.id, "message added");
        }

        let message_id = stored.id;
        self.messages.push(stored);
        message_id
    }

    /// Snapshot of every message in insertion order.
    ///
    /// Read flags come from the chat-embedded copies, which is where reads
    /// happen. A message no chat holds keeps its last known flag.
    pub fn list(&self) -> Vec<Message> {
        let chats = self.chats.borrow();
        self.messages
            .iter()
            .map(|message| {
                let mut snapshot = message.clone();
                if let Some(is_read) = chats.message_read_state(message.id) {
                    snapshot.is_read = is_read;
                }
                snapshot
            })
            .collect()
    }

    /// Removes message `id` from every chat and from the flat list.
    ///
    /// The result only reflects the flat list.
    pub fn delete(&mut self, id: i64) -> bool {
        let purged = self.chats.borrow_mut().purge_message(id);

        let Some(index) = self.messages.iter().position(|message| message.id == id) else {
            tracing::debug!(message_id = id, purged, "message delete skipped: not found");
            return false;
        };

        self.messages.remove(index);
        tracing::debug!(message_id = id, purged, "message deleted");
        true
    }

    /// Overwrites the text of message `id` with `replacement.text`.
    ///
    /// Id and read flag are never taken from `replacement`; the read flag is
    /// refreshed from the chat copy. A chat copy that cannot be found is
    /// skipped without error.
    pub fn edit(&mut self, id: i64, replacement: Message) -> Option<Message> {
        let message = self.messages.iter_mut().find(|message| message.id == id)?;
        message.text = replacement.text;

        let mut chats = self.chats.borrow_mut();
        let mirrored = chats.set_message_text(id, &message.text);
        if let Some(is_read) = chats.message_read_state(id) {
            message.is_read = is_read;
        }
        tracing::debug!(message_id = id, mirrored, "message edited");

        Some(message.clone())
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn clear(&mut self) {
        self.messages.clear();
        self.next_id = FIRST_MESSAGE_ID;
    }
}
