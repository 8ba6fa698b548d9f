//! Message model -> entity mapper

use msgly_core::entities::{Message, MessageWithUser, UserSummary};

use crate::models::{MessageModel, MessageWithUserModel};

impl From<MessageModel> for Message {
    fn from(model: MessageModel) -> Self {
        Message {
            id: model.id,
            from_username: model.from_username,
            to_username: model.to_username,
            body: model.body,
            sent_at: model.sent_at,
            read_at: model.read_at,
        }
    }
}

impl From<MessageWithUserModel> for MessageWithUser {
    fn from(model: MessageWithUserModel) -> Self {
        MessageWithUser {
            message: Message {
                id: model.id,
                from_username: model.from_username,
                to_username: model.to_username,
                body: model.body,
                sent_at: model.sent_at,
                read_at: model.read_at,
            },
            user: UserSummary {
                username: model.username,
                first_name: model.first_name,
                last_name: model.last_name,
                phone: model.phone,
            },
        }
    }
}
