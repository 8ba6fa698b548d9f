//! User database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for users table
#[derive(Debug, Clone, FromRow)]
pub struct UserModel {
    pub username: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub join_at: DateTime<Utc>,
    pub last_login_at: DateTime<Utc>,
}

/// Projection of the public user columns
#[derive(Debug, Clone, FromRow)]
pub struct UserSummaryModel {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
}
