//! Application error types
//!
//! Everything above the domain layer fails with [`AppError`]. Store and
//! domain failures arrive wrapped as [`AppError::Domain`].

use msgly_core::DomainError;
use serde::Serialize;

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid username/password")]
    InvalidCredentials,

    #[error("Invalid token")]
    InvalidToken,

    #[error("Token expired")]
    TokenExpired,

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Internal server error")]
    Internal(#[source] anyhow::Error),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// HTTP status an outer layer should answer with
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Validation(_) => 400,
            Self::InvalidCredentials | Self::InvalidToken | Self::TokenExpired => 401,
            Self::NotFound(_) => 404,
            Self::Internal(_) | Self::Config(_) => 500,
            Self::Domain(e) if e.is_not_found() => 404,
            Self::Domain(e) if e.is_validation() => 400,
            Self::Domain(e) if e.is_conflict() => 409,
            Self::Domain(_) => 500,
        }
    }

    /// Stable machine-readable code
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::InvalidToken => "INVALID_TOKEN",
            Self::TokenExpired => "TOKEN_EXPIRED",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::NotFound(_) => "NOT_FOUND",
            Self::Internal(_) => "INTERNAL_ERROR",
            Self::Config(_) => "CONFIG_ERROR",
            Self::Domain(e) => e.code(),
        }
    }

    #[must_use]
    pub fn is_server_error(&self) -> bool {
        self.status_code() >= 500
    }

    /// Wrap any error as an internal failure
    pub fn internal(err: impl Into<anyhow::Error>) -> Self {
        Self::Internal(err.into())
    }
}

/// Error body for an outer HTTP layer
///
/// Server errors carry a generic message; store and internal details stay in the logs.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl From<&AppError> for ErrorResponse {
    fn from(err: &AppError) -> Self {
        let message = if err.is_server_error() {
            "Internal server error".to_string()
        } else {
            err.to_string()
        };

        Self {
            code: err.error_code().to_string(),
            message,
        }
    }
}

impl From<AppError> for ErrorResponse {
    fn from(err: AppError) -> Self {
        Self::from(&err)
    }
}
