//! Error handling utilities for repositories
//!
//! Store errors are translated here so no SQLSTATE codes leak past this crate.

use msgly_core::error::DomainError;
use sqlx::Error as SqlxError;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Check for unique violation and return appropriate error or fallback
pub fn map_unique_violation<F>(e: SqlxError, on_unique: F) -> DomainError
where
    F: FnOnce() -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return on_unique();
        }
    }
    map_db_error(e)
}

/// Check for foreign key violation, passing the violated constraint name to `on_fk`
pub fn map_foreign_key_violation<F>(e: SqlxError, on_fk: F) -> DomainError
where
    F: FnOnce(Option<&str>) -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_foreign_key_violation() {
            return on_fk(db_err.constraint());
        }
    }
    map_db_error(e)
}

/// Create a "user not found" error
pub fn user_not_found(username: &str) -> DomainError {
    DomainError::UserNotFound(username.to_string())
}
