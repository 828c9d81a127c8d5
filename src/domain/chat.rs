use std::fmt;

use super::{
    message::{Message, UNASSIGNED_ID},
    user::User,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chat {
    pub id: i64,
    /// Fixed at creation. Order is kept for display only; lookups treat the
    /// pair as unordered.
    participants: [User; 2],
    pub messages: Vec<Message>,
}

impl Chat {
    pub fn new(participants: [User; 2]) -> Self {
        Self {
            id: UNASSIGNED_ID,
            participants,
            messages: Vec::new(),
        }
    }

    pub fn participants(&self) -> &[User; 2] {
        &self.participants
    }

    pub fn has_participant(&self, user: &User) -> bool {
        self.participants.contains(user)
    }

    /// True when the participant set equals `{a, b}`.
    pub fn is_between(&self, a: &User, b: &User) -> bool {
        let [first, second] = &self.participants;
        (first == a && second == b) || (first == b && second == a)
    }

    pub fn append_message(&mut self, message: Message) {
        self.messages.push(message);
    }

    pub fn last_message(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn has_unread_for(&self, user: &User) -> bool {
        self.has_participant(user) && self.messages.iter().any(|m| m.is_unread_for(user))
    }

    /// One-line preview of the latest message.
    pub fn last_message_line(&self) -> String {
        match self.last_message() {
            Some(last) => format!("Chat #{}: {}: {}", self.id, last.sender.name, last.text),
            None => format!("Chat #{}: no messages", self.id),
        }
    }
}

impl fmt::Display for Chat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [first, second] = self.participants();
        write!(
            f,
            "Chat #{} (users: {}, {}):",
            self.id, first.name, second.name
        )?;
        for message in &self.messages {
            write!(f, "\n - {}: {}", message.sender.name, message.text)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eva() -> User {
        User::new(1, "Eva")
    }

    fn adam() -> User {
        User::new(2, "Adam")
    }

    fn barbi() -> User {
        User::new(3, "Barbi")
    }

    #[test]
    fn pair_lookup_ignores_participant_order() {
        let chat = Chat::new([eva(), adam()]);

        assert!(chat.is_between(&eva(), &adam()));
        assert!(chat.is_between(&adam(), &eva()));
        assert!(!chat.is_between(&eva(), &barbi()));
    }

    #[test]
    fn self_chat_matches_only_the_same_user_twice() {
        let chat = Chat::new([eva(), eva()]);

        assert!(chat.is_between(&eva(), &eva()));
        assert!(!chat.is_between(&eva(), &adam()));
        assert!(!Chat::new([eva(), adam()]).is_between(&eva(), &eva()));
    }

    #[test]
    fn last_message_line_reports_empty_chat() {
        let mut chat = Chat::new([eva(), adam()]);
        chat.id = 4;

        assert_eq!(chat.last_message_line(), "Chat #4: no messages");
    }

    #[test]
    fn last_message_line_uses_latest_sender_and_text() {
        let mut chat = Chat::new([eva(), adam()]);
        chat.id = 1;
        chat.append_message(Message::new(eva(), adam(), "Hello"));
        chat.append_message(Message::new(adam(), eva(), "Hi"));

        assert_eq!(chat.last_message_line(), "Chat #1: Adam: Hi");
    }

    #[test]
    fn has_unread_requires_participation() {
        let mut chat = Chat::new([eva(), adam()]);
        chat.append_message(Message::new(eva(), barbi(), "stray"));

        assert!(!chat.has_unread_for(&barbi()));
    }

    #[test]
    fn display_lists_header_and_messages() {
        let mut chat = Chat::new([eva(), adam()]);
        chat.id = 1;
        chat.append_message(Message::new(eva(), adam(), "Hello"));
        chat.append_message(Message::new(adam(), eva(), "Hi"));

        assert_eq!(
            chat.to_string(),
            "Chat #1 (users: Eva, Adam):\n - Eva: Hello\n - Adam: Hi"
        );
    }
}
