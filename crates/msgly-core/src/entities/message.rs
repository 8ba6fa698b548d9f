//! Message entity - a directed message between two users

use chrono::{DateTime, Utc};

use super::user::UserSummary;

/// Message entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    /// Store-generated identifier
    pub id: i64,
    pub from_username: String,
    pub to_username: String,
    pub body: String,
    pub sent_at: DateTime<Utc>,
    pub read_at: Option<DateTime<Utc>>,
}

/// A message joined with the profile of its counterpart
///
/// For sent messages `user` is the recipient, for received messages the sender.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageWithUser {
    pub message: Message,
    pub user: UserSummary,
}
