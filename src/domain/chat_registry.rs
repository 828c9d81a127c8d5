//! Owner of all chats and the queries derived from them.

use super::{
    chat::Chat,
    message::{Message, UNASSIGNED_ID},
    user::User,
};

const FIRST_CHAT_ID: i64 = 1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatRegistry {
    chats: Vec<Chat>,
    next_id: i64,
}

impl Default for ChatRegistry {
    fn default() -> Self {
        Self {
            chats: Vec::new(),
            next_id: FIRST_CHAT_ID,
        }
    }
}

impl ChatRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `chat`, assigning the next id when it has none.
    ///
    /// A preset id is kept as is, even if another chat already uses it.
    pub fn add(&mut self, mut chat: Chat) -> i64 {
        if chat.id == UNASSIGNED_ID {
            chat.id = self.next_id;
            self.next_id += 1;
        }

        let chat_id = chat.id;
        tracing::debug!(chat_id, "chat registered");
        self.chats.push(chat);
        chat_id
    }

    /// Snapshot of every chat in insertion order.
    pub fn list(&self) -> Vec<Chat> {
        self.chats.clone()
    }

    pub fn len(&self) -> usize {
        self.chats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chats.is_empty()
    }

    pub fn delete(&mut self, id: i64) -> bool {
        let Some(index) = self.chats.iter().position(|chat| chat.id == id) else {
            tracing::debug!(chat_id = id, "chat delete skipped: not found");
            return false;
        };

        self.chats.remove(index);
        tracing::debug!(chat_id = id, "chat deleted");
        true
    }

    /// Replaces the whole message list of chat `id` with the one in `replacement`.
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn edit(&mut self, id: i64, replacement: Chat) -> Option<Chat> {
        let chat = self.chats.iter_mut().find(|chat| chat.id == id)?;
        chat.messages = replacement.messages;
        tracing::debug!(
            chat_id = id,
            messages = chat.messages.len(),
            "chat messages replaced"
        );

        Some(chat.clone())
    }

    pub fn find_by_participants(&self, a: &User, b: &User) -> Option<&Chat> {
        self.chats.iter().find(|chat| chat.is_between(a, b))
    }

    pub fn find_by_participants_mut(&mut self, a: &User, b: &User) -> Option<&mut Chat> {
        self.chats.iter_mut().find(|chat| chat.is_between(a, b))
    }

    /// Number of chats holding at least one unread message addressed to `user`.
    pub fn unread_chat_count(&self, user: &User) -> usize {
        self.chats
            .iter()
            .filter(|chat| chat.has_unread_for(user))
            .count()
    }

    pub fn last_message_per_chat(&self) -> Vec<String> {
        self.chats.iter().map(Chat::last_message_line).collect()
    }

    /// Returns up to `count` trailing messages of the `{user, peer}` chat.
    ///
    /// Every returned message addressed to `user` is marked as read; older
    /// history is left untouched.
    pub fn recent_messages(&mut self, user: &User, peer: &User, count: usize) -> Vec<Message> {
        let Some(chat) = self.find_by_participants_mut(user, peer) else {
            return Vec::new();
        };

        let start = chat.messages.len().saturating_sub(count);
        let recent = &mut chat.messages[start..];
        for message in recent.iter_mut() {
            if message.receiver == *user {
                message.is_read = true;
            }
        }

        tracing::debug!(
            chat_id = chat.id,
            returned = recent.len(),
            "recent messages read"
        );
        recent.to_vec()
    }

    /// Removes message `id` from every chat. Returns how many copies were dropped.
    pub fn purge_message(&mut self, id: i64) -> usize {
        let mut removed = 0;
        for chat in &mut self.chats {
            let before = chat.messages.len();
            chat.messages.retain(|message| message.id != id);
            removed += before - chat.messages.len();
        }

        removed
    }

    /// Read flag of the first chat-embedded copy of message `id`.
    pub fn message_read_state(&self, id: i64) -> Option<bool> {
        self.chats
            .iter()
            .flat_map(|chat| chat.messages.iter())
            .find(|message| message.id == id)
            .map(|message| message.is_read)
    }

    /// Overwrites the text of message `id` in every chat holding it.
    pub fn set_message_text(&mut self, id: i64, text: &str) -> bool {
        let mut updated = false;
        for chat in &mut self.chats {
            if let Some(message) = chat.messages.iter_mut().find(|message| message.id == id) {
                message.text = text.to_owned();
                updated = true;
            }
        }

        updated
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn clear(&mut self) {
        self.chats.clear();
        self.next_id = FIRST_CHAT_ID;
    }
}
