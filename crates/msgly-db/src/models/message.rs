//! Message database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for messages table
#[derive(Debug, Clone, FromRow)]
pub struct MessageModel {
    pub id: i64,
    pub from_username: String,
    pub to_username: String,
    pub body: String,
    pub sent_at: DateTime<Utc>,
    pub read_at: Option<DateTime<Utc>>,
}

/// A message row joined with the counterpart's public user columns
#[derive(Debug, Clone, FromRow)]
pub struct MessageWithUserModel {
    pub id: i64,
    pub from_username: String,
    pub to_username: String,
    pub body: String,
    pub sent_at: DateTime<Utc>,
    pub read_at: Option<DateTime<Utc>>,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
}
