//! PostgreSQL implementation of UserRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{instrument, warn};

use msgly_core::entities::{User, UserSummary};
use msgly_core::error::DomainError;
use msgly_core::traits::{RepoResult, UserRepository};

use crate::mappers::UserInsert;
use crate::models::{UserModel, UserSummaryModel};

use super::error::{map_db_error, map_unique_violation, user_not_found};

/// PostgreSQL implementation of UserRepository
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    /// Create a new PgUserRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    #[instrument(skip(self))]
    async fn find_by_username(&self, username: &str) -> RepoResult<Option<User>> {
        let result = sqlx::query_as::<_, UserModel>(
            r"
            SELECT username, password_hash, first_name, last_name, phone, join_at, last_login_at
            FROM users
            WHERE username = $1
            ",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(User::from))
    }

    #[instrument(skip(self))]
    async fn list_all(&self) -> RepoResult<Vec<UserSummary>> {
        let results = sqlx::query_as::<_, UserSummaryModel>(
            r"
            SELECT username, first_name, last_name, phone
            FROM users
            ORDER BY username
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(UserSummary::from).collect())
    }

    #[instrument(skip(self))]
    async fn username_exists(&self, username: &str) -> RepoResult<bool> {
        let result = sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS(SELECT 1 FROM users WHERE username = $1)
            ",
        )
        .bind(username)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }

    #[instrument(skip(self, user, password_hash), fields(username = %user.username))]
    async fn create(&self, user: &User, password_hash: &str) -> RepoResult<()> {
        let row = UserInsert::new(user, password_hash);

        sqlx::query(
            r"
            INSERT INTO users (username, password_hash, first_name, last_name, phone, join_at, last_login_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ",
        )
        .bind(row.username)
        .bind(row.password_hash)
        .bind(row.first_name)
        .bind(row.last_name)
        .bind(row.phone)
        .bind(row.join_at)
        .bind(row.last_login_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::UsernameTaken(user.username.clone())))?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn get_password_hash(&self, username: &str) -> RepoResult<Option<String>> {
        let result = sqlx::query_scalar::<_, String>(
            r"
            SELECT password_hash FROM users WHERE username = $1
            ",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }

    #[instrument(skip(self))]
    async fn update_last_login(&self, username: &str) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE users
            SET last_login_at = GREATEST(last_login_at, NOW())
            WHERE username = $1
            ",
        )
        .bind(username)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            warn!(username, "Login timestamp update matched no user");
            return Err(user_not_found(username));
        }

        Ok(())
    }
}
