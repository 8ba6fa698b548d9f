//! Response DTOs
//!
//! All response DTOs implement `Serialize` for JSON output.

use chrono::{DateTime, Utc};
use serde::Serialize;

// ============================================================================
// Auth Responses
// ============================================================================

/// Session token issued after registration or login
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub username: String,
}

// ============================================================================
// User Responses
// ============================================================================

/// Profile returned from registration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegisteredUserResponse {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub join_at: DateTime<Utc>,
}

/// Basic profile used in listings and as a message counterpart
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserSummaryResponse {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
}

/// Full public profile of a single user
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserDetailResponse {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub join_at: DateTime<Utc>,
    pub last_login_at: DateTime<Utc>,
}

// ============================================================================
// Message Responses
// ============================================================================

/// A message sent by the queried user, with its recipient
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SentMessageResponse {
    pub id: i64,
    pub body: String,
    pub sent_at: DateTime<Utc>,
    pub read_at: Option<DateTime<Utc>>,
    pub to_user: UserSummaryResponse,
}

/// A message addressed to the queried user, with its sender
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReceivedMessageResponse {
    pub id: i64,
    pub body: String,
    pub sent_at: DateTime<Utc>,
    pub read_at: Option<DateTime<Utc>>,
    pub from_user: UserSummaryResponse,
}
