//! In-memory repositories
//!
//! Behave like the PostgreSQL repositories: usernames are unique, timestamps
//! keep microsecond precision, logins never move `last_login_at` backwards,
//! and message views are joined with the counterpart profile and ordered by
//! `sent_at`, then id.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::RwLock;

use msgly_core::entities::{now_micros, Message, MessageWithUser, User, UserSummary};
use msgly_core::error::DomainError;
use msgly_core::traits::{MessageRepository, RepoResult, UserRepository};

struct StoredUser {
    user: User,
    password_hash: String,
}

/// User table keyed by username
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: RwLock<BTreeMap<String, StoredUser>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored users
    pub fn len(&self) -> usize {
        self.users.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.read().is_empty()
    }

    fn summary(&self, username: &str) -> Option<UserSummary> {
        self.users.read().get(username).map(|s| s.user.summary())
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_username(&self, username: &str) -> RepoResult<Option<User>> {
        Ok(self.users.read().get(username).map(|s| s.user.clone()))
    }

    async fn list_all(&self) -> RepoResult<Vec<UserSummary>> {
        Ok(self.users.read().values().map(|s| s.user.summary()).collect())
    }

    async fn username_exists(&self, username: &str) -> RepoResult<bool> {
        Ok(self.users.read().contains_key(username))
    }

    async fn create(&self, user: &User, password_hash: &str) -> RepoResult<()> {
        let mut users = self.users.write();
        if users.contains_key(&user.username) {
            return Err(DomainError::UsernameTaken(user.username.clone()));
        }
        users.insert(
            user.username.clone(),
            StoredUser {
                user: user.clone(),
                password_hash: password_hash.to_string(),
            },
        );
        Ok(())
    }

    async fn get_password_hash(&self, username: &str) -> RepoResult<Option<String>> {
        Ok(self
            .users
            .read()
            .get(username)
            .map(|s| s.password_hash.clone()))
    }

    async fn update_last_login(&self, username: &str) -> RepoResult<()> {
        let mut users = self.users.write();
        let stored = users
            .get_mut(username)
            .ok_or_else(|| DomainError::UserNotFound(username.to_string()))?;
        stored.user.record_login(now_micros());
        Ok(())
    }
}

/// Message table that joins against an [`InMemoryUserRepository`]
pub struct InMemoryMessageRepository {
    users: Arc<InMemoryUserRepository>,
    messages: RwLock<Vec<Message>>,
}

impl InMemoryMessageRepository {
    pub fn new(users: Arc<InMemoryUserRepository>) -> Self {
        Self {
            users,
            messages: RwLock::new(Vec::new()),
        }
    }

    fn joined<F, K>(&self, filter: F, counterpart: K) -> Vec<MessageWithUser>
    where
        F: Fn(&Message) -> bool,
        K: Fn(&Message) -> &str,
    {
        let mut rows: Vec<MessageWithUser> = self
            .messages
            .read()
            .iter()
            .filter(|m| filter(m))
            .filter_map(|m| {
                self.users.summary(counterpart(m)).map(|user| MessageWithUser {
                    message: m.clone(),
                    user,
                })
            })
            .collect();

        rows.sort_by(|a, b| {
            a.message
                .sent_at
                .cmp(&b.message.sent_at)
                .then(a.message.id.cmp(&b.message.id))
        });
        rows
    }
}

#[async_trait]
impl MessageRepository for InMemoryMessageRepository {
    async fn create(
        &self,
        from_username: &str,
        to_username: &str,
        body: &str,
    ) -> RepoResult<Message> {
        for username in [from_username, to_username] {
            if self.users.summary(username).is_none() {
                return Err(DomainError::UnknownUser(username.to_string()));
            }
        }

        let mut messages = self.messages.write();
        let id = i64::try_from(messages.len())
            .map_err(|e| DomainError::InternalError(e.to_string()))?
            + 1;
        let message = Message {
            id,
            from_username: from_username.to_string(),
            to_username: to_username.to_string(),
            body: body.to_string(),
            sent_at: now_micros(),
            read_at: None,
        };
        messages.push(message.clone());
        Ok(message)
    }

    async fn find_sent_by(&self, username: &str) -> RepoResult<Vec<MessageWithUser>> {
        Ok(self.joined(|m| m.from_username == username, |m| m.to_username.as_str()))
    }

    async fn find_received_by(&self, username: &str) -> RepoResult<Vec<MessageWithUser>> {
        Ok(self.joined(|m| m.to_username == username, |m| m.from_username.as_str()))
    }
}
