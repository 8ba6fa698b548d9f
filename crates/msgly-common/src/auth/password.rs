//! Password hashing and verification utilities
//!
//! Uses Argon2id for password hashing. The configurable work factor is the
//! Argon2 iteration count; memory cost and parallelism stay at the crate
//! defaults. Hashes are stored as PHC strings, so verification always uses
//! the parameters a hash was created with.

use std::fmt;

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Algorithm, Argon2, Params, Version,
};

use crate::error::AppError;

const DECOY_PASSWORD: &str = "msgly-decoy-password";

/// Hash a password using Argon2id with the given parameters
///
/// # Errors
/// Returns an error if hashing fails
pub fn hash_password(password: &str, params: &Params) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params.clone());

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Password hashing failed: {e}")))
}

/// Verify a password against a hash
///
/// # Errors
/// Returns an error if the hash is not a valid PHC string
pub fn verify_password(password: &str, hash: &str) -> Result<bool, AppError> {
    let parsed_hash = PasswordHash::new(hash)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Invalid password hash format: {e}")))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

/// Password service for dependency injection
///
/// All hashing runs on the blocking thread pool so a slow hash never stalls
/// the async executor.
#[derive(Clone)]
pub struct PasswordService {
    params: Params,
    decoy_hash: String,
}

impl PasswordService {
    /// Create a password service with the given work factor (Argon2 iterations)
    ///
    /// # Errors
    /// Returns `AppError::Config` if the work factor is zero or rejected by Argon2
    pub fn new(work_factor: u32) -> Result<Self, AppError> {
        if work_factor == 0 {
            return Err(AppError::Config(
                "hash work factor must be at least 1".to_string(),
            ));
        }

        let params = Params::new(
            Params::DEFAULT_M_COST,
            work_factor,
            Params::DEFAULT_P_COST,
            None,
        )
        .map_err(|e| AppError::Config(format!("invalid hash work factor {work_factor}: {e}")))?;

        // Stand-in for unknown users: same parameters, so verifying it costs the same
        let decoy_hash = hash_password(DECOY_PASSWORD, &params)?;

        Ok(Self { params, decoy_hash })
    }

    /// Get the configured work factor
    pub fn work_factor(&self) -> u32 {
        self.params.t_cost()
    }

    /// Hash a password
    ///
    /// # Errors
    /// Returns an error if hashing fails or the blocking task is cancelled
    pub async fn hash(&self, password: &str) -> Result<String, AppError> {
        let password = password.to_owned();
        let params = self.params.clone();

        tokio::task::spawn_blocking(move || hash_password(&password, &params))
            .await
            .map_err(AppError::internal)?
    }

    /// Verify a password against a hash
    ///
    /// # Errors
    /// Returns an error if the hash is malformed or the blocking task is cancelled
    pub async fn verify(&self, password: &str, hash: &str) -> Result<bool, AppError> {
        let password = password.to_owned();
        let hash = hash.to_owned();

        tokio::task::spawn_blocking(move || verify_password(&password, &hash))
            .await
            .map_err(AppError::internal)?
    }

    /// Verify a password against a stored hash, or against the decoy when there is none
    ///
    /// Both paths perform one full verification, so a missing account is not
    /// distinguishable from a wrong password by response time. Returns `false`
    /// whenever `hash` is `None`.
    ///
    /// # Errors
    /// Returns an error if the stored hash is malformed
    pub async fn verify_or_decoy(
        &self,
        password: &str,
        hash: Option<&str>,
    ) -> Result<bool, AppError> {
        match hash {
            Some(hash) => self.verify(password, hash).await,
            None => {
                self.verify(password, &self.decoy_hash).await?;
                Ok(false)
            }
        }
    }
}

impl fmt::Debug for PasswordService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PasswordService")
            .field("work_factor", &self.work_factor())
            .finish_non_exhaustive()
    }
}
