//! User model <-> entity mapper

use msgly_core::entities::{User, UserSummary};

use crate::models::{UserModel, UserSummaryModel};

/// Convert UserModel to User entity, dropping the password hash
impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            username: model.username,
            first_name: model.first_name,
            last_name: model.last_name,
            phone: model.phone,
            join_at: model.join_at,
            last_login_at: model.last_login_at,
        }
    }
}

impl From<UserSummaryModel> for UserSummary {
    fn from(model: UserSummaryModel) -> Self {
        UserSummary {
            username: model.username,
            first_name: model.first_name,
            last_name: model.last_name,
            phone: model.phone,
        }
    }
}

/// Column values for inserting a user row
pub struct UserInsert<'a> {
    pub username: &'a str,
    pub password_hash: &'a str,
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub phone: &'a str,
    pub join_at: chrono::DateTime<chrono::Utc>,
    pub last_login_at: chrono::DateTime<chrono::Utc>,
}

impl<'a> UserInsert<'a> {
    pub fn new(user: &'a User, password_hash: &'a str) -> Self {
        Self {
            username: &user.username,
            password_hash,
            first_name: &user.first_name,
            last_name: &user.last_name,
            phone: &user.phone,
            join_at: user.join_at,
            last_login_at: user.last_login_at,
        }
    }
}
