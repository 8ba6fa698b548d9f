//! Authentication service
//!
//! Handles registration and login on top of the credential store and hands
//! the verified username to the session issuer.

use msgly_common::AppError;
use tracing::{info, instrument, warn};
use validator::Validate;

use crate::dto::{AuthResponse, LoginRequest, RegisterRequest};

use super::context::ServiceContext;
use super::credential::CredentialStore;
use super::error::ServiceResult;

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a new user and issue a session token
    #[instrument(skip(self, request), fields(username = %request.username))]
    pub async fn register(&self, request: RegisterRequest) -> ServiceResult<AuthResponse> {
        let user = CredentialStore::new(self.ctx).register(request).await?;
        let token = self.ctx.session_issuer().issue(&user.username)?;

        Ok(AuthResponse {
            token,
            username: user.username,
        })
    }

    /// Log in with username and password
    ///
    /// # Errors
    /// `Unauthorized` (`InvalidCredentials`) when the pair does not match
    #[instrument(skip(self, request), fields(username = %request.username))]
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<AuthResponse> {
        request.validate()?;

        let credentials = CredentialStore::new(self.ctx);

        if !credentials
            .authenticate(&request.username, &request.password)
            .await?
        {
            warn!("Login failed: invalid username/password");
            return Err(AppError::InvalidCredentials.into());
        }

        credentials.update_login_timestamp(&request.username).await?;
        let token = self.ctx.session_issuer().issue(&request.username)?;

        info!("User logged in");

        Ok(AuthResponse {
            token,
            username: request.username,
        })
    }
}
