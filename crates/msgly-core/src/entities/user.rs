//! User entity - a registered account

use chrono::{DateTime, DurationRound, TimeDelta, Utc};

/// Current time truncated to whole microseconds, the precision of `TIMESTAMPTZ`
///
/// Timestamps built in memory then compare equal to what the store reads back.
pub fn now_micros() -> DateTime<Utc> {
    let now = Utc::now();
    now.duration_trunc(TimeDelta::microseconds(1)).unwrap_or(now)
}

/// User entity
///
/// The password hash is deliberately not part of the entity; repositories
/// hand it out only through `UserRepository::get_password_hash`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub join_at: DateTime<Utc>,
    pub last_login_at: DateTime<Utc>,
}

impl User {
    /// Create a new User joining now; `last_login_at` starts equal to `join_at`
    pub fn new(username: String, first_name: String, last_name: String, phone: String) -> Self {
        let now = now_micros();
        Self {
            username,
            first_name,
            last_name,
            phone,
            join_at: now,
            last_login_at: now,
        }
    }

    /// Record a login at `at`, never moving `last_login_at` backwards
    pub fn record_login(&mut self, at: DateTime<Utc>) {
        if at > self.last_login_at {
            self.last_login_at = at;
        }
    }

    /// Project the public summary of this user
    pub fn summary(&self) -> UserSummary {
        UserSummary {
            username: self.username.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            phone: self.phone.clone(),
        }
    }
}

/// Basic profile of a user, used for listings and as the counterpart of a message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserSummary {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
}

impl From<User> for UserSummary {
    fn from(user: User) -> Self {
        Self {
            username: user.username,
            first_name: user.first_name,
            last_name: user.last_name,
            phone: user.phone,
        }
    }
}
