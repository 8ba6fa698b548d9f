//! Request DTOs
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.
//! `Debug` output never includes passwords.

use std::borrow::Cow;
use std::fmt;

use serde::Deserialize;
use validator::{Validate, ValidationError};

/// Reject values that are empty or only whitespace
fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some(Cow::Borrowed("must not be blank"));
        return Err(err);
    }
    Ok(())
}

/// User registration request
#[derive(Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(custom(function = "not_blank"))]
    pub username: String,

    #[validate(custom(function = "not_blank"))]
    pub password: String,

    #[validate(length(min = 1, message = "First name is required"))]
    pub first_name: String,

    #[validate(length(min = 1, message = "Last name is required"))]
    pub last_name: String,

    #[validate(length(min = 1, message = "Phone is required"))]
    pub phone: String,
}

impl fmt::Debug for RegisterRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterRequest")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("phone", &self.phone)
            .finish()
    }
}

/// User login request
#[derive(Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(custom(function = "not_blank"))]
    pub username: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}
