//! Session tokens
//!
//! A `SessionIssuer` turns a verified username into a signed token. The
//! default implementation signs HS256 JWTs with the `jsonwebtoken` crate.

use chrono::{DateTime, TimeDelta, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Longest accepted token lifetime in seconds (one year)
pub const MAX_TOKEN_EXPIRY: i64 = 365 * 24 * 60 * 60;

/// Issues and verifies session tokens for authenticated users
pub trait SessionIssuer: Send + Sync {
    /// Issue a token for a username that has already been authenticated
    ///
    /// # Errors
    /// Returns an error if signing fails
    fn issue(&self, username: &str) -> Result<String, AppError>;

    /// Verify a token and return its claims
    ///
    /// # Errors
    /// Returns `AppError::InvalidToken` or `AppError::TokenExpired`
    fn verify(&self, token: &str) -> Result<Claims, AppError>;
}

/// JWT claims structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (username)
    pub sub: String,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp), absent for non-expiring tokens
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,
}

impl Claims {
    /// Get the username this token was issued for
    pub fn username(&self) -> &str {
        &self.sub
    }

    /// Check if the token is expired
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.exp.is_some_and(|exp| Utc::now().timestamp() > exp)
    }
}

/// JWT service for encoding and decoding tokens
#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    token_expiry: Option<i64>,
}

impl JwtService {
    /// Create a new JWT service with the given secret and optional token lifetime in seconds
    #[must_use]
    pub fn new(secret: &str, token_expiry: Option<i64>) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            token_expiry,
        }
    }

    /// Get the configured token lifetime in seconds
    pub fn token_expiry(&self) -> Option<i64> {
        self.token_expiry
    }

    /// Expiry timestamp for a token issued at `now`
    fn expires_at(&self, now: DateTime<Utc>) -> Result<Option<i64>, AppError> {
        let Some(expiry) = self.token_expiry else {
            return Ok(None);
        };

        if expiry <= 0 {
            return Err(AppError::internal(anyhow::anyhow!(
                "token lifetime must be positive, got {expiry}s"
            )));
        }

        TimeDelta::try_seconds(expiry)
            .and_then(|lifetime| now.checked_add_signed(lifetime))
            .map(|exp| Some(exp.timestamp()))
            .ok_or_else(|| {
                AppError::internal(anyhow::anyhow!("token lifetime {expiry}s is out of range"))
            })
    }

    fn validation(&self) -> Validation {
        let mut validation = Validation::default();
        if self.token_expiry.is_none() {
            // Tokens without `exp` are valid; any `exp` present is still checked
            validation.required_spec_claims.clear();
        }
        validation
    }
}

impl SessionIssuer for JwtService {
    fn issue(&self, username: &str) -> Result<String, AppError> {
        let now = Utc::now();

        let claims = Claims {
            sub: username.to_string(),
            iat: now.timestamp(),
            exp: self.expires_at(now)?,
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|_| AppError::Internal(anyhow::anyhow!("Failed to encode JWT")))
    }

    fn verify(&self, token: &str) -> Result<Claims, AppError> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation()).map_err(|e| {
                match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => AppError::TokenExpired,
                    _ => AppError::InvalidToken,
                }
            })?;

        Ok(token_data.claims)
    }
}

impl std::fmt::Debug for JwtService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtService")
            .field("token_expiry", &self.token_expiry)
            .finish_non_exhaustive()
    }
}
