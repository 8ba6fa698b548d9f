//! Service layer error types
//!
//! Every failure a caller can see collapses to one [`ErrorKind`], so outer
//! layers match on kinds rather than on messages.

use msgly_common::{AppError, ErrorResponse};
use msgly_core::DomainError;
use std::fmt;

/// Coarse classification of a service failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed or missing input
    Validation,
    /// Duplicate username
    Conflict,
    /// Unknown user
    NotFound,
    /// Failed login or bad session token
    Unauthorized,
    /// Store or infrastructure failure
    Internal,
}

/// Service layer error type
#[derive(Debug)]
pub enum ServiceError {
    /// Domain rule violation or store failure
    Domain(DomainError),

    /// Application error (auth, hashing, config)
    App(AppError),

    /// Resource not found
    NotFound { resource: &'static str, id: String },

    /// Validation error
    Validation(String),
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Domain(e) => write!(f, "{e}"),
            Self::App(e) => write!(f, "{e}"),
            Self::NotFound { resource, id } => write!(f, "{resource} not found: {id}"),
            Self::Validation(msg) => write!(f, "Validation error: {msg}"),
        }
    }
}

impl std::error::Error for ServiceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Domain(e) => Some(e),
            Self::App(e) => Some(e),
            _ => None,
        }
    }
}

fn domain_kind(err: &DomainError) -> ErrorKind {
    if err.is_not_found() {
        ErrorKind::NotFound
    } else if err.is_validation() {
        ErrorKind::Validation
    } else if err.is_conflict() {
        ErrorKind::Conflict
    } else {
        ErrorKind::Internal
    }
}

impl ServiceError {
    /// Create a not found error
    pub fn not_found(resource: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            resource,
            id: id.into(),
        }
    }

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Domain(e) | Self::App(AppError::Domain(e)) => domain_kind(e),
            Self::App(AppError::InvalidCredentials | AppError::InvalidToken | AppError::TokenExpired) => {
                ErrorKind::Unauthorized
            }
            Self::App(AppError::Validation(_)) | Self::Validation(_) => ErrorKind::Validation,
            Self::App(AppError::NotFound(_)) | Self::NotFound { .. } => ErrorKind::NotFound,
            Self::App(AppError::Internal(_) | AppError::Config(_)) => ErrorKind::Internal,
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self.kind() {
            ErrorKind::Validation => 400,
            ErrorKind::Unauthorized => 401,
            ErrorKind::NotFound => 404,
            ErrorKind::Conflict => 409,
            ErrorKind::Internal => 500,
        }
    }

    /// Get the error code for API responses
    pub fn error_code(&self) -> &str {
        match self {
            Self::Domain(e) => e.code(),
            Self::App(e) => e.error_code(),
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Validation(_) => "VALIDATION_ERROR",
        }
    }
}

impl From<DomainError> for ServiceError {
    fn from(err: DomainError) -> Self {
        Self::Domain(err)
    }
}

impl From<AppError> for ServiceError {
    fn from(err: AppError) -> Self {
        Self::App(err)
    }
}

impl From<validator::ValidationErrors> for ServiceError {
    fn from(err: validator::ValidationErrors) -> Self {
        Self::Validation(err.to_string())
    }
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Domain(e) => AppError::Domain(e),
            ServiceError::App(e) => e,
            ServiceError::NotFound { resource, id } => {
                AppError::NotFound(format!("{resource} {id}"))
            }
            ServiceError::Validation(msg) => AppError::Validation(msg),
        }
    }
}

impl From<ServiceError> for ErrorResponse {
    fn from(err: ServiceError) -> Self {
        AppError::from(err).into()
    }
}

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;
