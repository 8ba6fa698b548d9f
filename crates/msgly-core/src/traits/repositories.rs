//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation. Implementations are injected into the
//! service layer at construction time.

use async_trait::async_trait;

use crate::entities::{Message, MessageWithUser, User, UserSummary};
use crate::error::DomainError;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by username
    async fn find_by_username(&self, username: &str) -> RepoResult<Option<User>>;

    /// List the summary of every user, ordered by username
    async fn list_all(&self) -> RepoResult<Vec<UserSummary>>;

    /// Check if a username is already registered
    async fn username_exists(&self, username: &str) -> RepoResult<bool>;

    /// Create a new user
    ///
    /// Fails with `DomainError::UsernameTaken` if the username is already registered.
    async fn create(&self, user: &User, password_hash: &str) -> RepoResult<()>;

    /// Get password hash for authentication
    async fn get_password_hash(&self, username: &str) -> RepoResult<Option<String>>;

    /// Set `last_login_at` to now, never moving it backwards
    ///
    /// Fails with `DomainError::UserNotFound` if no row matches.
    async fn update_last_login(&self, username: &str) -> RepoResult<()>;
}

// ============================================================================
// Message Repository
// ============================================================================

#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// Insert a message; the store assigns `id` and `sent_at`
    ///
    /// Fails with `DomainError::UnknownUser` if either party does not exist.
    async fn create(&self, from_username: &str, to_username: &str, body: &str)
        -> RepoResult<Message>;

    /// Messages sent by `username`, each joined with its recipient, oldest first
    async fn find_sent_by(&self, username: &str) -> RepoResult<Vec<MessageWithUser>>;

    /// Messages addressed to `username`, each joined with its sender, oldest first
    async fn find_received_by(&self, username: &str) -> RepoResult<Vec<MessageWithUser>>;
}
