use super::user::User;

/// Id value meaning "not assigned yet".
pub const UNASSIGNED_ID: i64 = 0;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    /// Assigned by the message registry; any caller value is overwritten.
    pub id: i64,
    pub sender: User,
    pub receiver: User,
    pub text: String,
    pub is_read: bool,
}

impl Message {
    /// Builds an unread message with no id yet.
    pub fn new(sender: User, receiver: User, text: impl Into<String>) -> Self {
        Self {
            id: UNASSIGNED_ID,
            sender,
            receiver,
            text: text.into(),
            is_read: false,
        }
    }

    pub fn is_unread_for(&self, user: &User) -> bool {
        !self.is_read && self.receiver == *user
    }
}
