//! Credential store
//!
//! Owns the password-secrecy and username-uniqueness rules for users.
//! Plaintext passwords never leave this module except as input to the
//! password service, and no hash is ever returned to a caller.

use msgly_core::entities::User;
use msgly_core::DomainError;
use tracing::{info, instrument, warn};
use validator::Validate;

use crate::dto::{RegisterRequest, RegisteredUserResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Registers users, checks passwords, and records logins
pub struct CredentialStore<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CredentialStore<'a> {
    /// Create a new CredentialStore
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a new user and return their public profile
    ///
    /// # Errors
    /// `Validation` for missing or blank fields, `Conflict` if the username is taken
    #[instrument(skip(self, candidate), fields(username = %candidate.username))]
    pub async fn register(&self, candidate: RegisterRequest) -> ServiceResult<RegisteredUserResponse> {
        candidate.validate()?;

        // Skips the hash for an obvious duplicate; the store's unique key still decides races
        if self.ctx.user_repo().username_exists(&candidate.username).await? {
            return Err(DomainError::UsernameTaken(candidate.username).into());
        }

        let password_hash = self.ctx.password_service().hash(&candidate.password).await?;

        let user = User::new(
            candidate.username,
            candidate.first_name,
            candidate.last_name,
            candidate.phone,
        );
        self.ctx.user_repo().create(&user, &password_hash).await?;

        info!(username = %user.username, "User registered");

        Ok(RegisteredUserResponse::from(&user))
    }

    /// Check a username/password pair
    ///
    /// Returns `false` for a wrong password and for an unknown username alike;
    /// both paths run one full hash verification.
    ///
    /// # Errors
    /// Only store failures or a corrupt stored hash produce an error
    #[instrument(skip(self, password))]
    pub async fn authenticate(&self, username: &str, password: &str) -> ServiceResult<bool> {
        let stored = self.ctx.user_repo().get_password_hash(username).await?;

        let valid = self
            .ctx
            .password_service()
            .verify_or_decoy(password, stored.as_deref())
            .await?;

        if !valid {
            warn!("Authentication failed");
        }

        Ok(valid)
    }

    /// Set `last_login_at` to now
    ///
    /// Call only after `authenticate` returned `true`; this is not a verification step.
    ///
    /// # Errors
    /// `NotFound` if no user has this username
    #[instrument(skip(self))]
    pub async fn update_login_timestamp(&self, username: &str) -> ServiceResult<()> {
        self.ctx
            .user_repo()
            .update_last_login(username)
            .await
            .map_err(|e| {
                if e.is_not_found() {
                    warn!("Login timestamp update matched no user");
                }
                e.into()
            })
    }
}
