//! Service context - dependency container for services
//!
//! Holds the repositories, the password service and the session issuer.
//! Nothing here is process-global: each context is built explicitly and
//! handed to the services that borrow it.

use std::sync::Arc;

use msgly_common::auth::{JwtService, PasswordService, SessionIssuer};
use msgly_common::{AppConfig, AppError};
use msgly_core::traits::{MessageRepository, UserRepository};

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
#[derive(Clone)]
pub struct ServiceContext {
    // Repositories
    user_repo: Arc<dyn UserRepository>,
    message_repo: Arc<dyn MessageRepository>,

    // Services
    password_service: Arc<PasswordService>,
    session_issuer: Arc<dyn SessionIssuer>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        message_repo: Arc<dyn MessageRepository>,
        password_service: Arc<PasswordService>,
        session_issuer: Arc<dyn SessionIssuer>,
    ) -> Self {
        Self {
            user_repo,
            message_repo,
            password_service,
            session_issuer,
        }
    }

    /// Build a context from configuration, using `JwtService` as the session issuer
    ///
    /// # Errors
    /// Returns an `Internal` error if the configuration does not validate
    pub fn from_config(
        config: &AppConfig,
        user_repo: Arc<dyn UserRepository>,
        message_repo: Arc<dyn MessageRepository>,
    ) -> ServiceResult<Self> {
        config
            .validate()
            .map_err(|e| AppError::Config(e.to_string()))?;

        let password_service = PasswordService::new(config.security.hash_work_factor)?;
        let session_issuer = JwtService::new(&config.jwt.secret, config.jwt.token_expiry);

        Ok(Self::new(
            user_repo,
            message_repo,
            Arc::new(password_service),
            Arc::new(session_issuer),
        ))
    }

    // === Repositories ===

    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    /// Get the message repository
    pub fn message_repo(&self) -> &dyn MessageRepository {
        self.message_repo.as_ref()
    }

    // === Services ===

    /// Get the password service
    pub fn password_service(&self) -> &PasswordService {
        self.password_service.as_ref()
    }

    /// Get the session issuer
    pub fn session_issuer(&self) -> &dyn SessionIssuer {
        self.session_issuer.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("password_service", &self.password_service)
            .finish_non_exhaustive()
    }
}

/// Builder for creating ServiceContext with custom configuration
#[derive(Default)]
pub struct ServiceContextBuilder {
    user_repo: Option<Arc<dyn UserRepository>>,
    message_repo: Option<Arc<dyn MessageRepository>>,
    password_service: Option<Arc<PasswordService>>,
    session_issuer: Option<Arc<dyn SessionIssuer>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn message_repo(mut self, repo: Arc<dyn MessageRepository>) -> Self {
        self.message_repo = Some(repo);
        self
    }

    pub fn password_service(mut self, service: Arc<PasswordService>) -> Self {
        self.password_service = Some(service);
        self
    }

    pub fn session_issuer(mut self, issuer: Arc<dyn SessionIssuer>) -> Self {
        self.session_issuer = Some(issuer);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.user_repo
                .ok_or_else(|| ServiceError::validation("user_repo is required"))?,
            self.message_repo
                .ok_or_else(|| ServiceError::validation("message_repo is required"))?,
            self.password_service
                .ok_or_else(|| ServiceError::validation("password_service is required"))?,
            self.session_issuer
                .ok_or_else(|| ServiceError::validation("session_issuer is required"))?,
        ))
    }
}
