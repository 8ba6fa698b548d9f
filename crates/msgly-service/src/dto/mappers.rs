//! Entity to DTO mappers

use msgly_core::entities::{MessageWithUser, User, UserSummary};

use super::responses::{
    ReceivedMessageResponse, RegisteredUserResponse, SentMessageResponse, UserDetailResponse,
    UserSummaryResponse,
};

impl From<&User> for RegisteredUserResponse {
    fn from(user: &User) -> Self {
        Self {
            username: user.username.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            phone: user.phone.clone(),
            join_at: user.join_at,
        }
    }
}

impl From<&User> for UserDetailResponse {
    fn from(user: &User) -> Self {
        Self {
            username: user.username.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            phone: user.phone.clone(),
            join_at: user.join_at,
            last_login_at: user.last_login_at,
        }
    }
}

impl From<UserSummary> for UserSummaryResponse {
    fn from(summary: UserSummary) -> Self {
        Self {
            username: summary.username,
            first_name: summary.first_name,
            last_name: summary.last_name,
            phone: summary.phone,
        }
    }
}

impl From<MessageWithUser> for SentMessageResponse {
    fn from(row: MessageWithUser) -> Self {
        Self {
            id: row.message.id,
            body: row.message.body,
            sent_at: row.message.sent_at,
            read_at: row.message.read_at,
            to_user: row.user.into(),
        }
    }
}

impl From<MessageWithUser> for ReceivedMessageResponse {
    fn from(row: MessageWithUser) -> Self {
        Self {
            id: row.message.id,
            body: row.message.body,
            sent_at: row.message.sent_at,
            read_at: row.message.read_at,
            from_user: row.user.into(),
        }
    }
}
