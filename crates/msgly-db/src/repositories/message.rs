//! PostgreSQL implementation of MessageRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use msgly_core::entities::{Message, MessageWithUser};
use msgly_core::error::DomainError;
use msgly_core::traits::{MessageRepository, RepoResult};

use crate::models::{MessageModel, MessageWithUserModel};

use super::error::{map_db_error, map_foreign_key_violation};

/// PostgreSQL implementation of MessageRepository
#[derive(Clone)]
pub struct PgMessageRepository {
    pool: PgPool,
}

impl PgMessageRepository {
    /// Create a new PgMessageRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MessageRepository for PgMessageRepository {
    #[instrument(skip(self, body))]
    async fn create(
        &self,
        from_username: &str,
        to_username: &str,
        body: &str,
    ) -> RepoResult<Message> {
        let result = sqlx::query_as::<_, MessageModel>(
            r"
            INSERT INTO messages (from_username, to_username, body, sent_at)
            VALUES ($1, $2, $3, NOW())
            RETURNING id, from_username, to_username, body, sent_at, read_at
            ",
        )
        .bind(from_username)
        .bind(to_username)
        .bind(body)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            map_foreign_key_violation(e, |constraint| {
                let missing = match constraint {
                    Some("messages_from_username_fkey") => from_username,
                    _ => to_username,
                };
                DomainError::UnknownUser(missing.to_string())
            })
        })?;

        Ok(Message::from(result))
    }

    #[instrument(skip(self))]
    async fn find_sent_by(&self, username: &str) -> RepoResult<Vec<MessageWithUser>> {
        let results = sqlx::query_as::<_, MessageWithUserModel>(
            r"
            SELECT m.id, m.from_username, m.to_username, m.body, m.sent_at, m.read_at,
                   u.username, u.first_name, u.last_name, u.phone
            FROM messages m
            JOIN users u ON u.username = m.to_username
            WHERE m.from_username = $1
            ORDER BY m.sent_at, m.id
            ",
        )
        .bind(username)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(MessageWithUser::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_received_by(&self, username: &str) -> RepoResult<Vec<MessageWithUser>> {
        let results = sqlx::query_as::<_, MessageWithUserModel>(
            r"
            SELECT m.id, m.from_username, m.to_username, m.body, m.sent_at, m.read_at,
                   u.username, u.first_name, u.last_name, u.phone
            FROM messages m
            JOIN users u ON u.username = m.from_username
            WHERE m.to_username = $1
            ORDER BY m.sent_at, m.id
            ",
        )
        .bind(username)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(MessageWithUser::from).collect())
    }
}
